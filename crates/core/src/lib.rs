pub mod analysis;
pub mod cache;
pub mod config;
pub mod error;
pub mod format;
pub mod transcribe;
pub mod types;

pub use analysis::analyze;
pub use cache::{
    get_audio_path, get_cache_dir, get_model_dir, get_report_path, get_root_cache_dir,
    get_transcript_export_path, get_transcript_path,
};
pub use config::{AnalysisConfig, ScoreWeights};
pub use error::{PodiumError, Result};
pub use format::{format_report_readable, format_timestamp, format_transcript_with_timestamps};
pub use transcribe::{
    convert_to_wav_16k, ensure_model, load_report, load_transcript, save_report, transcribe_audio,
};
pub use types::{
    AnalysisReport, CompositeScore, FillerStats, KeywordCoverage, RoundType, Segment,
    SentimentLabel, SentimentPoint, ToneLabel, Transcript,
};
