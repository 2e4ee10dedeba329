use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PodiumError, Result};
use crate::types::RoundType;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Linear weights for one composite score. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub pace: f64,
    pub filler: f64,
    pub sentiment: f64,
    pub coverage: f64,
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.pace + self.filler + self.sentiment + self.coverage
    }

    fn components(&self) -> [(&'static str, f64); 4] {
        [
            ("pace", self.pace),
            ("filler", self.filler),
            ("sentiment", self.sentiment),
            ("coverage", self.coverage),
        ]
    }
}

/// Everything the analysis pipeline is parameterized by. Passed explicitly
/// into `analyze`; scoped to one invocation, never process-global.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Tokens counted as fillers. Multi-word entries match consecutive
    /// token runs.
    pub filler_words: BTreeSet<String>,
    /// Target keywords per interview round. Sets for different rounds must
    /// not overlap.
    pub keyword_sets: BTreeMap<RoundType, BTreeSet<String>>,
    pub overall_weights: ScoreWeights,
    pub confidence_weights: ScoreWeights,
    /// WPM band scored as optimal pace.
    pub wpm_ideal_range: (f64, f64),
    /// Below this WPM the delivery reads as slow.
    pub wpm_slow: f64,
    /// Above this WPM the delivery reads as rushed.
    pub wpm_fast: f64,
    /// Filler density (fillers per word) at or above which the tone is
    /// labeled Nervous regardless of polarity.
    pub nervous_filler_density: f64,
    /// Mean polarity at or below which the tone is labeled Uncertain.
    pub uncertain_polarity: f64,
    /// Per-segment polarity magnitude separating Positive/Negative from
    /// Neutral.
    pub sentiment_label_cutoff: f64,
    /// Filler density at which the filler component bottoms out at 0.
    pub filler_density_cap: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let filler_words = [
            "um", "uh", "like", "you know", "i mean", "so", "actually", "basically", "right",
            "well", "hmm", "huh", "erm",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        let mut keyword_sets = BTreeMap::new();
        keyword_sets.insert(
            RoundType::Technical,
            ["algorithm", "design", "testing", "performance"]
                .into_iter()
                .map(str::to_string)
                .collect::<BTreeSet<_>>(),
        );
        keyword_sets.insert(
            RoundType::Hr,
            ["team", "conflict", "feedback", "motivation"]
                .into_iter()
                .map(str::to_string)
                .collect::<BTreeSet<_>>(),
        );
        keyword_sets.insert(
            RoundType::Managerial,
            ["leadership", "stakeholder", "delivery", "mentoring"]
                .into_iter()
                .map(str::to_string)
                .collect::<BTreeSet<_>>(),
        );

        AnalysisConfig {
            filler_words,
            keyword_sets,
            overall_weights: ScoreWeights {
                pace: 0.30,
                filler: 0.30,
                sentiment: 0.20,
                coverage: 0.20,
            },
            confidence_weights: ScoreWeights {
                pace: 0.20,
                filler: 0.45,
                sentiment: 0.35,
                coverage: 0.0,
            },
            wpm_ideal_range: (120.0, 160.0),
            wpm_slow: 110.0,
            wpm_fast: 160.0,
            nervous_filler_density: 0.08,
            uncertain_polarity: -0.25,
            sentiment_label_cutoff: 0.15,
            filler_density_cap: 0.15,
        }
    }
}

impl AnalysisConfig {
    /// Load a configuration from a JSON file. Unspecified fields keep their
    /// defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json_content = std::fs::read_to_string(path)?;
        let config: AnalysisConfig = serde_json::from_str(&json_content)?;
        Ok(config)
    }

    /// Keywords configured for a round; empty when none are configured.
    pub fn keywords_for(&self, round: RoundType) -> BTreeSet<String> {
        self.keyword_sets.get(&round).cloned().unwrap_or_default()
    }

    /// Fail fast on a malformed configuration, before any analysis runs.
    pub fn validate(&self) -> Result<()> {
        for (name, weights) in [
            ("overall", &self.overall_weights),
            ("confidence", &self.confidence_weights),
        ] {
            for (component, value) in weights.components() {
                if !(0.0..=1.0).contains(&value) {
                    return Err(PodiumError::Configuration {
                        reason: format!(
                            "{name} weight for {component} is {value}, expected 0.0..=1.0"
                        ),
                    });
                }
            }
            let sum = weights.sum();
            if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                return Err(PodiumError::Configuration {
                    reason: format!("{name} weights sum to {sum}, expected 1.0"),
                });
            }
        }

        let (lo, hi) = self.wpm_ideal_range;
        if lo <= 0.0 || hi <= lo {
            return Err(PodiumError::Configuration {
                reason: format!("wpm_ideal_range ({lo}, {hi}) is not an increasing positive range"),
            });
        }

        if self.filler_density_cap <= 0.0 {
            return Err(PodiumError::Configuration {
                reason: format!(
                    "filler_density_cap is {}, expected > 0.0",
                    self.filler_density_cap
                ),
            });
        }

        for (round, keywords) in &self.keyword_sets {
            for keyword in keywords {
                if keyword.trim().is_empty() {
                    return Err(PodiumError::Configuration {
                        reason: format!("empty keyword in {} set", round.name()),
                    });
                }
            }
        }

        // Keyword sets key distinct rounds; the same keyword in two sets is
        // almost always a copy/paste mistake.
        let rounds: Vec<_> = self.keyword_sets.iter().collect();
        for (i, (round_a, set_a)) in rounds.iter().enumerate() {
            for (round_b, set_b) in rounds.iter().skip(i + 1) {
                if let Some(shared) = set_a.intersection(set_b).next() {
                    return Err(PodiumError::Configuration {
                        reason: format!(
                            "keyword \"{shared}\" appears in both {} and {} sets",
                            round_a.name(),
                            round_b.name()
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}
