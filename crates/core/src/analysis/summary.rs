use crate::config::AnalysisConfig;
use crate::types::{CompositeScore, RoundType};

/// Metric bundle the suggestion and summary rules read from.
pub struct RuleInput<'a> {
    pub wpm: f64,
    pub filler_total: usize,
    pub mean_polarity: f64,
    pub config: &'a AnalysisConfig,
}

/// Filler counts at which the wording escalates.
const FILLER_HEAVY: usize = 15;
const FILLER_NOTICEABLE: usize = 5;

struct SuggestionRule {
    applies: fn(&RuleInput) -> bool,
    text: &'static str,
}

/// Ordered, independently evaluated rules. Every rule whose predicate holds
/// contributes its line, in this order.
const SUGGESTION_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        applies: |input| input.wpm > input.config.wpm_fast,
        text: "Reduce speaking speed to improve clarity and allow listeners to follow.",
    },
    SuggestionRule {
        applies: |input| input.wpm > 0.0 && input.wpm < input.config.wpm_slow,
        text: "Try to speak slightly faster and add more energy to your delivery.",
    },
    SuggestionRule {
        applies: |input| input.filler_total > FILLER_HEAVY,
        text: "Work on removing filler words such as 'um', 'uh', and 'like'; practice pauses instead.",
    },
    SuggestionRule {
        applies: |input| {
            input.filler_total > FILLER_NOTICEABLE && input.filler_total <= FILLER_HEAVY
        },
        text: "Be mindful of filler words; aim to reduce them with focused practice.",
    },
    SuggestionRule {
        applies: |input| input.mean_polarity < -0.2,
        text: "Aim for a more positive and confident tone when responding.",
    },
    SuggestionRule {
        applies: |input| input.mean_polarity > 0.5,
        text: "Your tone is positive; maintain this while balancing clarity.",
    },
];

const FALLBACK_SUGGESTION: &str =
    "Good communication. Small refinements (pauses, clarity) may help make it stronger.";

pub fn suggestions(input: &RuleInput) -> Vec<String> {
    let mut out: Vec<String> = SUGGESTION_RULES
        .iter()
        .filter(|rule| (rule.applies)(input))
        .map(|rule| rule.text.to_string())
        .collect();
    if out.is_empty() {
        out.push(FALLBACK_SUGGESTION.to_string());
    }
    out
}

fn round_hint(round: RoundType) -> &'static str {
    match round {
        RoundType::Technical => {
            " Responses could benefit from more concrete technical examples and clarity on design choices."
        }
        RoundType::Hr => {
            " Consider focusing on structured storytelling (STAR) for behavioral answers."
        }
        RoundType::Managerial => {
            " Consider emphasizing leadership decisions, outcomes, and stakeholder impact."
        }
        RoundType::General => "",
    }
}

/// Templated one-paragraph summary from pace, filler use, mood, the
/// composite score and tone, and the round-specific hint.
pub fn summary_text(round: RoundType, input: &RuleInput, score: &CompositeScore) -> String {
    let mood = if input.mean_polarity > 0.2 {
        "positive"
    } else if input.mean_polarity > -0.2 {
        "neutral"
    } else {
        "negative"
    };

    let pace_desc = if input.wpm <= 0.0 {
        "an unmeasured pace (no timing available)"
    } else if input.wpm > input.config.wpm_fast {
        "a fast-paced manner"
    } else if input.wpm < input.config.wpm_slow {
        "a slow-paced manner"
    } else {
        "a well-paced manner"
    };

    let filler_desc = if input.filler_total > 20 {
        "high filler usage"
    } else if input.filler_total > FILLER_NOTICEABLE {
        "moderate filler usage"
    } else {
        "minimal filler usage"
    };

    format!(
        "This appears to be a {} interview. The candidate spoke in {} with {}. Overall sentiment was {}, scoring {}/100 with a {} tone.{}",
        round.name(),
        pace_desc,
        filler_desc,
        mood,
        score.overall,
        score.tone.name(),
        round_hint(round)
    )
}

/// Words whose presence marks a sentence as a likely key statement.
const ACHIEVEMENT_WORDS: &[&str] = &[
    "project", "designed", "implemented", "led", "improved", "reduced", "increased", "result",
    "achieve",
];

/// Lightweight key-point extraction: naive sentence split, sentences scored
/// by length plus a bonus per achievement word, top `max_points` returned
/// score-descending (ties keep transcript order).
pub fn key_points(transcript: &str, max_points: usize) -> Vec<String> {
    if transcript.trim().is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(usize, String)> = transcript
        .split_inclusive(['.', '!', '?'])
        .filter_map(|raw| {
            let sentence = raw.trim();
            if sentence.is_empty() {
                return None;
            }
            let lower = sentence.to_lowercase();
            let mut score = sentence.split_whitespace().count();
            for word in ACHIEVEMENT_WORDS {
                if lower.contains(word) {
                    score += 5;
                }
            }
            Some((score, sentence.to_string()))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(max_points)
        .map(|(_, sentence)| sentence)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToneLabel;

    fn score(overall: u8, tone: ToneLabel) -> CompositeScore {
        CompositeScore {
            overall,
            confidence: overall,
            tone,
        }
    }

    fn input(wpm: f64, filler_total: usize, mean_polarity: f64) -> RuleInput<'static> {
        use std::sync::OnceLock;
        static CONFIG: OnceLock<AnalysisConfig> = OnceLock::new();
        RuleInput {
            wpm,
            filler_total,
            mean_polarity,
            config: CONFIG.get_or_init(AnalysisConfig::default),
        }
    }

    #[test]
    fn test_matching_rules_contribute_in_order() {
        // Fast, heavy fillers, negative mood: three rules fire.
        let out = suggestions(&input(190.0, 20, -0.4));
        assert_eq!(out.len(), 3);
        assert!(out[0].contains("Reduce speaking speed"));
        assert!(out[1].contains("removing filler words"));
        assert!(out[2].contains("more positive"));
    }

    #[test]
    fn test_fallback_when_no_rule_fires() {
        let out = suggestions(&input(140.0, 2, 0.1));
        assert_eq!(out.len(), 1);
        assert!(out[0].starts_with("Good communication"));
    }

    #[test]
    fn test_unmeasured_pace_does_not_trigger_slow_rule() {
        let out = suggestions(&input(0.0, 0, 0.0));
        assert!(!out.iter().any(|s| s.contains("speak slightly faster")));
    }

    #[test]
    fn test_summary_mentions_round_and_mood() {
        let text = summary_text(
            RoundType::Technical,
            &input(140.0, 3, 0.3),
            &score(80, ToneLabel::Confident),
        );
        assert!(text.contains("Technical interview"));
        assert!(text.contains("well-paced"));
        assert!(text.contains("minimal filler usage"));
        assert!(text.contains("positive"));
        assert!(text.contains("technical examples"));
    }

    #[test]
    fn test_summary_includes_score_and_tone() {
        let text = summary_text(
            RoundType::General,
            &input(140.0, 2, 0.3),
            &score(82, ToneLabel::Confident),
        );
        assert!(text.contains("82/100"));
        assert!(text.contains("Confident tone"));
    }

    #[test]
    fn test_summary_flags_unmeasured_pace() {
        let text = summary_text(
            RoundType::General,
            &input(0.0, 0, 0.0),
            &score(50, ToneLabel::Neutral),
        );
        assert!(text.contains("unmeasured pace"));
    }

    #[test]
    fn test_key_points_prefer_achievement_sentences() {
        let transcript = "Yes. I led the migration project and reduced costs by half. \
                          The weather was nice that day.";
        let points = key_points(transcript, 2);
        assert_eq!(points.len(), 2);
        assert!(points[0].contains("led the migration"));
    }

    #[test]
    fn test_key_points_empty_transcript() {
        assert!(key_points("   ", 5).is_empty());
    }
}
