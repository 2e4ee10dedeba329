use crate::analysis::lexical::tokenize;
use crate::config::AnalysisConfig;
use crate::types::{Segment, SentimentLabel, SentimentPoint, ToneLabel};

/// Fixed word lexicon with weights, tuned for interview speech. An
/// ML-backed scorer would slot in behind the same polarity/label contract.
const POSITIVE: &[(&str, f64)] = &[
    ("great", 1.0),
    ("excellent", 1.0),
    ("love", 1.0),
    ("success", 1.0),
    ("successful", 1.0),
    ("achieved", 0.9),
    ("confident", 0.9),
    ("proud", 0.9),
    ("excited", 0.9),
    ("passionate", 0.9),
    ("good", 0.8),
    ("enjoy", 0.8),
    ("enjoyed", 0.8),
    ("happy", 0.8),
    ("best", 0.8),
    ("improved", 0.8),
    ("solved", 0.8),
    ("win", 0.8),
    ("strong", 0.7),
    ("effective", 0.7),
    ("efficient", 0.7),
    ("growth", 0.7),
    ("delivered", 0.6),
    ("opportunity", 0.6),
    ("learned", 0.6),
];

const NEGATIVE: &[(&str, f64)] = &[
    ("fail", 1.0),
    ("failed", 1.0),
    ("failure", 1.0),
    ("hate", 1.0),
    ("nervous", 0.9),
    ("afraid", 0.9),
    ("bad", 0.8),
    ("poor", 0.8),
    ("worried", 0.8),
    ("worry", 0.8),
    ("struggle", 0.8),
    ("struggled", 0.8),
    ("stressed", 0.8),
    ("wrong", 0.7),
    ("mistake", 0.7),
    ("weak", 0.7),
    ("stress", 0.7),
    ("problem", 0.6),
    ("unfortunately", 0.6),
    ("difficult", 0.5),
    ("hard", 0.4),
    ("never", 0.3),
];

fn word_weight(token: &str) -> f64 {
    if let Some((_, w)) = POSITIVE.iter().find(|(word, _)| *word == token) {
        return *w;
    }
    if let Some((_, w)) = NEGATIVE.iter().find(|(word, _)| *word == token) {
        return -w;
    }
    0.0
}

/// Net lexicon weight normalized by word count, clamped to [-1, 1].
/// Empty or unscored text is 0.0.
pub fn segment_polarity(text: &str) -> f64 {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return 0.0;
    }
    let net: f64 = tokens.iter().map(|t| word_weight(t)).sum();
    (net / tokens.len() as f64).clamp(-1.0, 1.0)
}

pub fn label_for(polarity: f64, cutoff: f64) -> SentimentLabel {
    if polarity > cutoff {
        SentimentLabel::Positive
    } else if polarity < -cutoff {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// One sentiment point per segment, in transcript order.
pub fn sentiment_timeline(segments: &[Segment], config: &AnalysisConfig) -> Vec<SentimentPoint> {
    segments
        .iter()
        .enumerate()
        .map(|(segment_index, segment)| {
            let polarity = segment_polarity(&segment.text);
            SentimentPoint {
                segment_index,
                start: segment.start,
                end: segment.end,
                polarity,
                label: label_for(polarity, config.sentiment_label_cutoff),
            }
        })
        .collect()
}

pub fn mean_polarity(timeline: &[SentimentPoint]) -> f64 {
    if timeline.is_empty() {
        return 0.0;
    }
    timeline.iter().map(|p| p.polarity).sum::<f64>() / timeline.len() as f64
}

struct ToneRule {
    label: ToneLabel,
    applies: fn(mean_polarity: f64, filler_density: f64, config: &AnalysisConfig) -> bool,
}

/// Ordered tone rules, first match wins. The final rule always applies, so
/// the mapping is total. Heavy filler use overrides polarity toward
/// Nervous; deeply negative polarity reads as Uncertain.
const TONE_RULES: &[ToneRule] = &[
    ToneRule {
        label: ToneLabel::Nervous,
        applies: |_, density, config| density >= config.nervous_filler_density,
    },
    ToneRule {
        label: ToneLabel::Uncertain,
        applies: |mean, _, config| mean <= config.uncertain_polarity,
    },
    ToneRule {
        label: ToneLabel::Confident,
        applies: |mean, _, _| mean > 0.0,
    },
    ToneRule {
        label: ToneLabel::Neutral,
        applies: |_, _, _| true,
    },
];

pub fn tone_label(mean_polarity: f64, filler_density: f64, config: &AnalysisConfig) -> ToneLabel {
    TONE_RULES
        .iter()
        .find(|rule| (rule.applies)(mean_polarity, filler_density, config))
        .map(|rule| rule.label)
        .unwrap_or(ToneLabel::Neutral)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polarity_normalized_by_word_count() {
        // One +1.0 word among four tokens.
        let polarity = segment_polarity("this role is great");
        assert_relative_eq!(polarity, 0.25, epsilon = 1e-9);
    }

    #[test]
    fn test_polarity_clamped() {
        assert!(segment_polarity("great excellent love success") <= 1.0);
        assert!(segment_polarity("fail failure hate bad") >= -1.0);
    }

    #[test]
    fn test_empty_segment_is_neutral_zero() {
        assert_eq!(segment_polarity(""), 0.0);
        assert_eq!(label_for(0.0, 0.15), SentimentLabel::Neutral);
    }

    #[test]
    fn test_label_cutoffs() {
        assert_eq!(label_for(0.2, 0.15), SentimentLabel::Positive);
        assert_eq!(label_for(-0.2, 0.15), SentimentLabel::Negative);
        assert_eq!(label_for(0.15, 0.15), SentimentLabel::Neutral);
        assert_eq!(label_for(-0.15, 0.15), SentimentLabel::Neutral);
    }

    #[test]
    fn test_high_filler_density_overrides_positive_polarity() {
        let config = AnalysisConfig::default();
        assert_eq!(tone_label(0.5, 0.12, &config), ToneLabel::Nervous);
    }

    #[test]
    fn test_very_low_polarity_is_uncertain() {
        let config = AnalysisConfig::default();
        assert_eq!(tone_label(-0.4, 0.0, &config), ToneLabel::Uncertain);
    }

    #[test]
    fn test_tone_follows_polarity_sign_otherwise() {
        let config = AnalysisConfig::default();
        assert_eq!(tone_label(0.1, 0.0, &config), ToneLabel::Confident);
        assert_eq!(tone_label(0.0, 0.0, &config), ToneLabel::Neutral);
        assert_eq!(tone_label(-0.1, 0.0, &config), ToneLabel::Neutral);
    }

    #[test]
    fn test_tone_mapping_is_total() {
        let config = AnalysisConfig::default();
        for mean in [-1.0, -0.5, -0.25, 0.0, 0.25, 0.5, 1.0] {
            for density in [0.0, 0.05, 0.08, 0.5, 1.0] {
                // Must resolve without panicking for every combination.
                let _ = tone_label(mean, density, &config);
            }
        }
    }

    #[test]
    fn test_timeline_preserves_segment_order() {
        let config = AnalysisConfig::default();
        let segments = vec![
            Segment {
                start: 0.0,
                end: 5.0,
                text: "this was a great success".to_string(),
            },
            Segment {
                start: 5.0,
                end: 10.0,
                text: "then everything failed badly".to_string(),
            },
        ];
        let timeline = sentiment_timeline(&segments, &config);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].segment_index, 0);
        assert_eq!(timeline[0].label, SentimentLabel::Positive);
        assert_eq!(timeline[1].label, SentimentLabel::Negative);
        assert!(mean_polarity(&timeline).abs() <= 1.0);
    }
}
