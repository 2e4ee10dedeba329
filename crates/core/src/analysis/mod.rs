pub mod keywords;
pub mod lexical;
pub mod score;
pub mod sentiment;
pub mod summary;

use crate::config::AnalysisConfig;
use crate::error::{PodiumError, Result};
use crate::types::{AnalysisReport, RoundType, Transcript};

use score::ComponentScores;
use summary::RuleInput;

const MAX_KEY_POINTS: usize = 5;

/// Run the whole analysis pipeline over one transcript and assemble the
/// report. Pure: identical transcript + config + round always produce an
/// identical report.
///
/// Aborts only on whole-pipeline preconditions (no segments, malformed
/// configuration). Degenerate metric inputs degrade the affected section to
/// a neutral value and record it in `report.degraded` instead of failing.
pub fn analyze(
    transcript: &Transcript,
    round: RoundType,
    config: &AnalysisConfig,
) -> Result<AnalysisReport> {
    config.validate()?;

    if transcript.segments.is_empty() {
        return Err(PodiumError::EmptyTranscript);
    }

    let full_text = if transcript.text.trim().is_empty() {
        transcript
            .segments
            .iter()
            .map(|s| s.text.trim())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        transcript.text.clone()
    };

    let mut degraded = Vec::new();

    // Lexical metrics
    let tokens = lexical::tokenize(&full_text);
    let total_words = tokens.len();
    if total_words == 0 {
        degraded.push("lexical".to_string());
    }
    let filler = lexical::filler_stats(&tokens, &config.filler_words);
    let (duration_seconds, wpm) = match lexical::duration_seconds(&transcript.segments) {
        Ok(duration) => (duration, lexical::words_per_minute(total_words, duration)),
        Err(PodiumError::InsufficientData { .. }) => {
            degraded.push("pacing".to_string());
            (0.0, 0.0)
        }
        Err(other) => return Err(other),
    };

    // Sentiment timeline and tone
    let timeline = sentiment::sentiment_timeline(&transcript.segments, config);
    let mean_polarity = sentiment::mean_polarity(&timeline);
    let filler_density = if total_words == 0 {
        0.0
    } else {
        filler.total as f64 / total_words as f64
    };
    let tone = sentiment::tone_label(mean_polarity, filler_density, config);

    // Keyword coverage
    let coverage = keywords::keyword_coverage(&config.keywords_for(round), &full_text);

    // Composite scores
    let components = ComponentScores {
        pace: score::pace_score(wpm, config.wpm_ideal_range),
        filler: score::filler_score(filler.total, total_words, config.filler_density_cap),
        sentiment: score::sentiment_score(mean_polarity),
        coverage: score::coverage_score(&coverage),
    };
    let composite = score::composite_score(&components, config, tone);

    // Summary, suggestions, key points
    let rule_input = RuleInput {
        wpm,
        filler_total: filler.total,
        mean_polarity,
        config,
    };
    let suggestion_list = summary::suggestions(&rule_input);
    let summary_line = summary::summary_text(round, &rule_input, &composite);
    let key_points = summary::key_points(&full_text, MAX_KEY_POINTS);

    Ok(AnalysisReport {
        round,
        duration_seconds,
        total_words,
        wpm,
        filler,
        sentiment: timeline,
        mean_polarity,
        keywords: coverage,
        score: composite,
        summary: summary_line,
        suggestions: suggestion_list,
        key_points,
        transcript: full_text,
        segments: transcript.segments.clone(),
        degraded,
    })
}
