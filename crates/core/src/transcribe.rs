use std::path::{Path, PathBuf};

use tokio::{fs, process::Command};
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::{
    cache::get_model_dir,
    error::{PodiumError, Result},
    types::{AnalysisReport, Segment, Transcript},
};

/// Quantized small model: the best quality/latency trade-off on CPU.
pub const MODEL_NAME: &str = "ggml-small-q5_1.bin";

/// Download the whisper model into the cache if it is not there yet.
pub async fn ensure_model(cache_dir: &Path) -> Result<PathBuf> {
    let download_url = format!(
        "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/{}",
        MODEL_NAME
    );
    let model_dir = get_model_dir(cache_dir);

    if !model_dir.exists() {
        fs::create_dir_all(&model_dir).await?;
    }

    let model_path = model_dir.join(MODEL_NAME);
    if !model_path.exists() {
        let output = Command::new("curl")
            .arg("-L")
            .arg(&download_url)
            .arg("-o")
            .arg(&model_path)
            .output()
            .await?;

        if !output.status.success() {
            return Err(PodiumError::ModelDownloadFailed {
                url: download_url,
                reason: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }
    }

    Ok(model_path)
}

/// Convert any audio input to 16 kHz mono PCM WAV using ffmpeg, the format
/// whisper expects.
pub async fn convert_to_wav_16k(input_path: &Path, wav_path: &Path) -> Result<()> {
    let output = Command::new("ffmpeg")
        .arg("-y")
        .arg("-i")
        .arg(input_path)
        .arg("-acodec")
        .arg("pcm_s16le")
        .arg("-ar")
        .arg("16000")
        .arg("-ac")
        .arg("1")
        .arg(wav_path)
        .output()
        .await?;

    if !output.status.success() {
        return Err(PodiumError::AudioConversionFailed {
            input_path: input_path.to_path_buf(),
            reason: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(())
}

/// Transcribe a 16 kHz mono WAV with whisper-rs and persist the transcript
/// as pretty JSON at `output_path`.
pub async fn transcribe_audio(
    audio_path: &Path,
    output_path: &Path,
    model_path: &str,
    language: Option<&str>,
) -> Result<Transcript> {
    let mut reader =
        hound::WavReader::open(audio_path).map_err(|e| PodiumError::TranscriptFailed {
            audio_path: audio_path.to_path_buf(),
            reason: e.to_string(),
        })?;
    let raw_samples = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<i16>, _>>()
        .map_err(|e| PodiumError::TranscriptFailed {
            audio_path: audio_path.to_path_buf(),
            reason: e.to_string(),
        })?;
    let samples: Vec<f32> = raw_samples
        .into_iter()
        .map(|s| s as f32 / i16::MAX as f32)
        .collect();

    let ctx = WhisperContext::new_with_params(model_path, WhisperContextParameters::default())
        .map_err(|e| PodiumError::TranscriptFailed {
            audio_path: audio_path.to_path_buf(),
            reason: format!("failed to load model: {e}"),
        })?;

    let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 5 });
    params.set_language(language);

    let mut state = ctx
        .create_state()
        .map_err(|e| PodiumError::TranscriptFailed {
            audio_path: audio_path.to_path_buf(),
            reason: format!("failed to create state: {e}"),
        })?;
    state
        .full(params, &samples)
        .map_err(|e| PodiumError::TranscriptFailed {
            audio_path: audio_path.to_path_buf(),
            reason: format!("failed to run model: {e}"),
        })?;

    let mut text = String::new();
    let mut segments: Vec<Segment> = Vec::new();

    for segment in state.as_iter() {
        let seg_text = match segment.to_str() {
            Ok(s) => s,
            Err(_) => continue,
        };
        segments.push(Segment {
            start: segment.start_timestamp() as f64 / 100.0,
            end: segment.end_timestamp() as f64 / 100.0,
            text: seg_text.trim().to_string(),
        });

        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(seg_text.trim());
    }

    let language_index = state.full_lang_id_from_state();
    let language = whisper_rs::get_lang_str(language_index);

    let transcript = Transcript {
        language: language.unwrap_or("unknown").to_string(),
        segments,
        text,
    };

    fs::write(output_path, serde_json::to_string_pretty(&transcript)?).await?;

    Ok(transcript)
}

/// Load a transcript from a cached file
pub async fn load_transcript(path: &Path) -> Result<Transcript> {
    let json_content = fs::read_to_string(path).await?;
    let transcript: Transcript = serde_json::from_str(&json_content)?;
    Ok(transcript)
}

/// Load a report from a cached file
pub async fn load_report(path: &Path) -> Result<AnalysisReport> {
    let json_content = fs::read_to_string(path).await?;
    let report: AnalysisReport = serde_json::from_str(&json_content)?;
    Ok(report)
}

/// Save a report to a file
pub async fn save_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let pretty_json = serde_json::to_string_pretty(report)?;
    fs::write(path, &pretty_json).await?;
    Ok(())
}
