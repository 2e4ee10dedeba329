use crate::config::{AnalysisConfig, ScoreWeights};
use crate::types::{CompositeScore, KeywordCoverage, ToneLabel};

/// Per-metric component scores, each in [0, 1]. Inputs to both weighted
/// composites.
#[derive(Debug, Clone, Copy)]
pub struct ComponentScores {
    pub pace: f64,
    pub filler: f64,
    pub sentiment: f64,
    pub coverage: f64,
}

/// 1.0 inside the ideal WPM band, decaying linearly with distance from the
/// nearest band edge, reaching 0 at 100 WPM away. Unmeasurable pace scores 0.
pub fn pace_score(wpm: f64, wpm_ideal_range: (f64, f64)) -> f64 {
    if wpm <= 0.0 {
        return 0.0;
    }
    let (lo, hi) = wpm_ideal_range;
    if wpm >= lo && wpm <= hi {
        return 1.0;
    }
    let distance = if wpm < lo { lo - wpm } else { wpm - hi };
    (1.0 - distance / 100.0).max(0.0)
}

/// 1.0 for filler-free speech, falling to 0 at `filler_density_cap` fillers
/// per word.
pub fn filler_score(filler_total: usize, total_words: usize, filler_density_cap: f64) -> f64 {
    if total_words == 0 {
        return 1.0;
    }
    let density = filler_total as f64 / total_words as f64;
    (1.0 - density / filler_density_cap).clamp(0.0, 1.0)
}

/// Mean polarity [-1, 1] shifted into [0, 1].
pub fn sentiment_score(mean_polarity: f64) -> f64 {
    ((mean_polarity + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// Fraction of configured keywords found. With nothing configured the
/// component is neutral 1.0 so an empty set never penalizes the composite.
pub fn coverage_score(coverage: &KeywordCoverage) -> f64 {
    let configured = coverage.found.len() + coverage.missing.len();
    if configured == 0 {
        return 1.0;
    }
    coverage.found.len() as f64 / configured as f64
}

fn weighted(components: &ComponentScores, weights: &ScoreWeights) -> u8 {
    let raw = (components.pace * weights.pace
        + components.filler * weights.filler
        + components.sentiment * weights.sentiment
        + components.coverage * weights.coverage)
        * 100.0;
    raw.round().clamp(0.0, 100.0) as u8
}

/// Combine the component scores under the configured weight tables.
pub fn composite_score(
    components: &ComponentScores,
    config: &AnalysisConfig,
    tone: ToneLabel,
) -> CompositeScore {
    CompositeScore {
        overall: weighted(components, &config.overall_weights),
        confidence: weighted(components, &config.confidence_weights),
        tone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::BTreeSet;

    #[test]
    fn test_pace_score_inside_band_is_full() {
        assert_relative_eq!(pace_score(120.0, (120.0, 160.0)), 1.0);
        assert_relative_eq!(pace_score(140.0, (120.0, 160.0)), 1.0);
        assert_relative_eq!(pace_score(160.0, (120.0, 160.0)), 1.0);
    }

    #[test]
    fn test_pace_score_decays_linearly_outside_band() {
        assert_relative_eq!(pace_score(110.0, (120.0, 160.0)), 0.9, epsilon = 1e-9);
        assert_relative_eq!(pace_score(210.0, (120.0, 160.0)), 0.5, epsilon = 1e-9);
        assert_relative_eq!(pace_score(300.0, (120.0, 160.0)), 0.0);
        assert_relative_eq!(pace_score(0.0, (120.0, 160.0)), 0.0);
    }

    #[test]
    fn test_filler_score_bounds() {
        assert_relative_eq!(filler_score(0, 100, 0.15), 1.0);
        assert_relative_eq!(filler_score(15, 100, 0.15), 0.0);
        assert_relative_eq!(filler_score(100, 100, 0.15), 0.0);
        // Degenerate zero-word transcript stays neutral.
        assert_relative_eq!(filler_score(0, 0, 0.15), 1.0);
    }

    #[test]
    fn test_sentiment_score_maps_polarity_range() {
        assert_relative_eq!(sentiment_score(-1.0), 0.0);
        assert_relative_eq!(sentiment_score(0.0), 0.5);
        assert_relative_eq!(sentiment_score(1.0), 1.0);
    }

    #[test]
    fn test_coverage_score_neutral_when_unconfigured() {
        let empty = KeywordCoverage {
            found: BTreeSet::new(),
            missing: BTreeSet::new(),
        };
        assert_relative_eq!(coverage_score(&empty), 1.0);
    }

    #[test]
    fn test_composite_scores_within_bounds() {
        let config = AnalysisConfig::default();
        for pace in [0.0, 0.5, 1.0] {
            for filler in [0.0, 1.0] {
                for sentiment in [0.0, 0.5, 1.0] {
                    let components = ComponentScores {
                        pace,
                        filler,
                        sentiment,
                        coverage: 1.0,
                    };
                    let score = composite_score(&components, &config, ToneLabel::Neutral);
                    assert!(score.overall <= 100);
                    assert!(score.confidence <= 100);
                }
            }
        }
    }

    #[test]
    fn test_composite_scores_reproducible_from_weight_table() {
        let config = AnalysisConfig::default();
        let components = ComponentScores {
            pace: 1.0,
            filler: 0.8,
            sentiment: 0.6,
            coverage: 0.5,
        };
        let score = composite_score(&components, &config, ToneLabel::Confident);
        // 0.3*1.0 + 0.3*0.8 + 0.2*0.6 + 0.2*0.5 = 0.76
        assert_eq!(score.overall, 76);
        // 0.2*1.0 + 0.45*0.8 + 0.35*0.6 + 0.0*0.5 = 0.77
        assert_eq!(score.confidence, 77);
        assert_eq!(score.tone, ToneLabel::Confident);
    }
}
