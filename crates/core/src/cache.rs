use std::{
    hash::{DefaultHasher, Hash, Hasher},
    path::{Path, PathBuf},
};

use crate::types::RoundType;

/// Get the cache directory for a given input (audio path or pasted text)
pub fn get_cache_dir(input_key: &str) -> PathBuf {
    let mut hasher = DefaultHasher::new();
    input_key.hash(&mut hasher);
    let input_hash = hasher.finish();
    let cache_dir = get_root_cache_dir();

    cache_dir.join(input_hash.to_string())
}

pub fn get_root_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("podium")
}

pub fn get_model_dir(cache_dir: &Path) -> PathBuf {
    cache_dir.join("models")
}

/// Get the path for the converted 16 kHz mono audio file
pub fn get_audio_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join("audio.wav")
}

/// Get the path for a cached transcript file
pub fn get_transcript_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join("transcript.json")
}

/// Get the path for a cached report file (round-type aware). A run with a
/// keyword or config override gets its own file keyed by the override, so
/// it never overwrites the default-configuration report.
pub fn get_report_path(cache_dir: &Path, round: RoundType, override_key: Option<&str>) -> PathBuf {
    match override_key {
        None => cache_dir.join(format!("report_{}.json", round.slug())),
        Some(key) => {
            let mut hasher = DefaultHasher::new();
            key.hash(&mut hasher);
            cache_dir.join(format!("report_{}_{}.json", round.slug(), hasher.finish()))
        }
    }
}

/// Get the path for the plain-text transcript export
pub fn get_transcript_export_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join("transcript.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dir_is_stable_per_input() {
        assert_eq!(get_cache_dir("a.wav"), get_cache_dir("a.wav"));
        assert_ne!(get_cache_dir("a.wav"), get_cache_dir("b.wav"));
    }

    #[test]
    fn test_report_path_is_round_aware() {
        let dir = PathBuf::from("/tmp/podium/x");
        assert_eq!(
            get_report_path(&dir, RoundType::Technical, None),
            dir.join("report_technical.json")
        );
        assert_ne!(
            get_report_path(&dir, RoundType::Hr, None),
            get_report_path(&dir, RoundType::Managerial, None)
        );
    }

    #[test]
    fn test_override_runs_never_share_the_default_report_path() {
        let dir = PathBuf::from("/tmp/podium/x");
        let default = get_report_path(&dir, RoundType::Technical, None);
        let overridden = get_report_path(&dir, RoundType::Technical, Some("kubernetes,grpc"));
        assert_ne!(default, overridden);
        // Stable per override, distinct across overrides.
        assert_eq!(
            overridden,
            get_report_path(&dir, RoundType::Technical, Some("kubernetes,grpc"))
        );
        assert_ne!(
            overridden,
            get_report_path(&dir, RoundType::Technical, Some("team,conflict"))
        );
    }
}
