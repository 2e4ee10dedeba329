use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PodiumError {
    #[error("Transcript has no segments: nothing to analyze")]
    EmptyTranscript,

    #[error("Insufficient data for {metric}: {reason}")]
    InsufficientData { metric: &'static str, reason: String },

    #[error("Invalid configuration: {reason}")]
    Configuration { reason: String },

    #[error("Model download failed from {url}: {reason}")]
    ModelDownloadFailed { url: String, reason: String },

    #[error("Audio conversion failed for {input_path}: {reason}")]
    AudioConversionFailed { input_path: PathBuf, reason: String },

    #[error("Transcription failed for {audio_path}: {reason}")]
    TranscriptFailed { audio_path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PodiumError>;
