use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    pub segments: Vec<Segment>,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl Transcript {
    /// Wrap pasted text as a single untimed segment. An empty paste yields
    /// no segments at all, which the pipeline rejects up front.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        let segments = if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![Segment {
                start: 0.0,
                end: 0.0,
                text: trimmed.to_string(),
            }]
        };
        Transcript {
            text: trimmed.to_string(),
            segments,
            language: "unknown".to_string(),
        }
    }
}

/// Interview round context. Keys the configured keyword set and the
/// round-specific hint in the summary.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RoundType {
    #[default]
    General,
    Technical,
    Hr,
    Managerial,
}

impl RoundType {
    pub fn name(&self) -> &'static str {
        match self {
            RoundType::General => "General",
            RoundType::Technical => "Technical",
            RoundType::Hr => "HR",
            RoundType::Managerial => "Managerial",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            RoundType::General => "general",
            RoundType::Technical => "technical",
            RoundType::Hr => "hr",
            RoundType::Managerial => "managerial",
        }
    }
}

/// Filler-word occurrence counts. Only tokens that actually occurred are
/// listed; `total` is the sum over `by_word`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillerStats {
    pub total: usize,
    pub by_word: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

/// One point on the sentiment timeline, carrying the segment's time span
/// for charting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentPoint {
    pub segment_index: usize,
    pub start: f64,
    pub end: f64,
    pub polarity: f64,
    pub label: SentimentLabel,
}

/// Partition of the configured keyword set: found ∪ missing equals the
/// configured set and the two never overlap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordCoverage {
    pub found: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToneLabel {
    Confident,
    Neutral,
    Nervous,
    Uncertain,
}

impl ToneLabel {
    pub fn name(&self) -> &'static str {
        match self {
            ToneLabel::Confident => "Confident",
            ToneLabel::Neutral => "Neutral",
            ToneLabel::Nervous => "Nervous",
            ToneLabel::Uncertain => "Uncertain",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompositeScore {
    pub overall: u8,
    pub confidence: u8,
    pub tone: ToneLabel,
}

/// The single exported artifact: everything the analysis produced for one
/// transcript, plus the raw transcript itself. Field names are consumed by
/// the dashboard export and must stay stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub round: RoundType,
    pub duration_seconds: f64,
    pub total_words: usize,
    pub wpm: f64,
    pub filler: FillerStats,
    pub sentiment: Vec<SentimentPoint>,
    pub mean_polarity: f64,
    pub keywords: KeywordCoverage,
    pub score: CompositeScore,
    pub summary: String,
    pub suggestions: Vec<String>,
    pub key_points: Vec<String>,
    pub transcript: String,
    pub segments: Vec<Segment>,
    /// Names of sections reported as neutral defaults because their input
    /// was degenerate (e.g. "pacing" for a zero-duration transcript).
    pub degraded: Vec<String>,
}
