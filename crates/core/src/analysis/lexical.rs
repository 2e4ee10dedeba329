use std::collections::{BTreeMap, BTreeSet};

use crate::error::{PodiumError, Result};
use crate::types::{FillerStats, Segment};

/// Lowercase word tokens: whitespace-split with surrounding punctuation
/// stripped, so "Like," and "like" count as the same token.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| {
            raw.chars()
                .filter(|c| c.is_alphanumeric() || *c == '\'')
                .collect::<String>()
                .trim_matches('\'')
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Count filler occurrences by exact token match, never substring search,
/// so "like" does not fire inside "likely". Multi-word fillers ("you know")
/// match consecutive token runs.
pub fn filler_stats(tokens: &[String], filler_words: &BTreeSet<String>) -> FillerStats {
    let mut by_word = BTreeMap::new();
    let mut total = 0;

    for filler in filler_words {
        let normalized = filler.to_lowercase();
        let phrase: Vec<&str> = normalized.split_whitespace().collect();
        if phrase.is_empty() || tokens.len() < phrase.len() {
            continue;
        }

        let count = tokens
            .windows(phrase.len())
            .filter(|window| window.iter().map(String::as_str).eq(phrase.iter().copied()))
            .count();

        if count > 0 {
            by_word.insert(normalized, count);
            total += count;
        }
    }

    FillerStats { total, by_word }
}

/// Spoken duration: last segment end minus first segment start. Degenerate
/// timing is an `InsufficientData` error the pipeline downgrades to a
/// zeroed pacing section.
pub fn duration_seconds(segments: &[Segment]) -> Result<f64> {
    let (first, last) = match (segments.first(), segments.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(PodiumError::InsufficientData {
                metric: "pacing",
                reason: "no timed segments".to_string(),
            });
        }
    };

    let duration = last.end - first.start;
    if duration <= 0.0 {
        return Err(PodiumError::InsufficientData {
            metric: "pacing",
            reason: format!("non-positive duration {duration:.2}s"),
        });
    }
    Ok(duration)
}

pub fn words_per_minute(total_words: usize, duration_seconds: f64) -> f64 {
    if duration_seconds <= 0.0 {
        return 0.0;
    }
    total_words as f64 / (duration_seconds / 60.0)
}
