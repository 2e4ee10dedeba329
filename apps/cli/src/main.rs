use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;

use podium_core::{
    AnalysisConfig, RoundType, Transcript, analyze, convert_to_wav_16k, ensure_model,
    format_report_readable, format_transcript_with_timestamps, get_audio_path, get_cache_dir,
    get_report_path, get_root_cache_dir, get_transcript_export_path, get_transcript_path,
    load_report, load_transcript, save_report, transcribe_audio,
};

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", secs / 60.0, secs % 60.0)
    }
}

/// CLI wrapper for RoundType enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliRound {
    #[default]
    General,
    Technical,
    Hr,
    Managerial,
}

impl From<CliRound> for RoundType {
    fn from(cli: CliRound) -> Self {
        match cli {
            CliRound::General => RoundType::General,
            CliRound::Technical => RoundType::Technical,
            CliRound::Hr => RoundType::Hr,
            CliRound::Managerial => RoundType::Managerial,
        }
    }
}

#[derive(Parser)]
#[command(name = "podium")]
#[command(
    about = "Transcribe interview audio with Whisper and generate a rule-based speech feedback report"
)]
struct Cli {
    /// Interview audio file (.wav/.mp3/.m4a/.flac)
    #[arg(required_unless_present = "text")]
    audio: Option<PathBuf>,

    /// Paste a transcript directly instead of providing audio
    #[arg(short, long, conflicts_with = "audio")]
    text: Option<String>,

    /// Interview round type
    #[arg(short, long, default_value = "general")]
    round: CliRound,

    /// Comma-separated keywords to check, overriding the configured set for this round
    #[arg(short, long)]
    keywords: Option<String>,

    /// JSON analysis configuration file (unset fields keep their defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Transcription language (ISO code)
    #[arg(short, long, default_value = "en")]
    lang: String,

    /// Force re-processing even if cached files exist
    #[arg(short, long)]
    force: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

extern "C" fn whisper_log_callback(
    _level: u32,
    _message: *const std::ffi::c_char,
    _user_data: *mut std::ffi::c_void,
) {
    // silent
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let round: RoundType = cli.round.into();

    unsafe {
        whisper_rs::set_log_callback(Some(whisper_log_callback), std::ptr::null_mut());
    }

    // Assemble configuration and validate early, before any work
    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(keywords) = &cli.keywords {
        let set: BTreeSet<String> = keywords
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();
        config.keyword_sets.insert(round, set);
    }
    if let Err(e) = config.validate() {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    // Setup cache directory keyed by the input
    let input_key = match (&cli.audio, &cli.text) {
        (Some(path), _) => path.to_string_lossy().to_string(),
        (None, Some(text)) => text.clone(),
        (None, None) => unreachable!("clap enforces audio or --text"),
    };
    let root_cache_dir = get_root_cache_dir();
    let cache_dir = get_cache_dir(&input_key);
    fs::create_dir_all(&cache_dir).await?;

    println!(
        "\n{}  {}\n",
        style("podium").cyan().bold(),
        style("Interview Analyzer").dim()
    );
    println!("{}", style("─".repeat(60)).dim());

    let total_start = Instant::now();

    let transcript = if let Some(text) = &cli.text {
        println!(
            "{} Using pasted transcript {}",
            style("✓").green().bold(),
            style("(pacing metrics unavailable)").dim()
        );
        Transcript::from_text(text)
    } else {
        let audio_input = cli.audio.as_ref().expect("audio path present");

        // Ensure model is downloaded
        println!("{} Checking model...", style("✓").green().bold());
        let model_path = ensure_model(&root_cache_dir).await?;

        // Step 1: Convert to 16 kHz mono WAV (check cache)
        let step_start = Instant::now();
        let audio_file = get_audio_path(&cache_dir);
        if !cli.force && audio_file.exists() {
            println!(
                "{} Audio converted {}",
                style("✓").green().bold(),
                style("(cached)").dim()
            );
        } else {
            let spinner = create_spinner("Converting audio...");
            convert_to_wav_16k(audio_input, &audio_file).await?;
            spinner.finish_with_message(format!(
                "{} Audio converted {}",
                style("✓").green().bold(),
                style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
            ));
        }

        // Step 2: Transcribe (check cache)
        let step_start = Instant::now();
        let transcript_path = get_transcript_path(&cache_dir);
        if !cli.force && transcript_path.exists() {
            let transcript = load_transcript(&transcript_path).await?;
            let duration_mins = transcript
                .segments
                .last()
                .map(|s| s.end / 60.0)
                .unwrap_or(0.0);
            println!(
                "{} Transcribed: {:.1} min, {} {}",
                style("✓").green().bold(),
                duration_mins,
                style(&transcript.language).yellow(),
                style("(cached)").dim()
            );
            transcript
        } else {
            let spinner = create_spinner("Transcribing with Whisper...");
            let model_path_str = model_path.to_string_lossy();
            let transcript = transcribe_audio(
                &audio_file,
                &transcript_path,
                &model_path_str,
                Some(&cli.lang),
            )
            .await?;
            let duration_mins = transcript
                .segments
                .last()
                .map(|s| s.end / 60.0)
                .unwrap_or(0.0);
            spinner.finish_with_message(format!(
                "{} Transcribed: {:.1} min, {} {}",
                style("✓").green().bold(),
                duration_mins,
                style(&transcript.language).yellow(),
                style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
            ));
            transcript
        }
    };

    // Step 3: Analyze (check cache with round). Override runs write to
    // their own report file so they never poison the default report cache.
    let step_start = Instant::now();
    let override_key = match (&cli.config, &cli.keywords) {
        (None, None) => None,
        (config_path, keywords) => Some(format!(
            "{}|{}",
            config_path
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
            keywords.clone().unwrap_or_default()
        )),
    };
    let report_path = get_report_path(&cache_dir, round, override_key.as_deref());
    let report = if !cli.force && override_key.is_none() && report_path.exists() {
        let report = load_report(&report_path).await?;
        println!(
            "{} Analyzed ({} round) {}",
            style("✓").green().bold(),
            round.name(),
            style("(cached)").dim()
        );
        report
    } else {
        let spinner = create_spinner(&format!("Analyzing ({} round)...", round.name()));
        let report = analyze(&transcript, round, &config)?;
        save_report(&report, &report_path).await?;
        spinner.finish_with_message(format!(
            "{} Analyzed ({} round) {}",
            style("✓").green().bold(),
            round.name(),
            style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
        ));
        report
    };

    if !report.degraded.is_empty() {
        println!(
            "{} Degraded sections: {}",
            style("!").yellow().bold(),
            style(report.degraded.join(", ")).yellow()
        );
    }

    // Plain-text transcript export
    let transcript_export_path = get_transcript_export_path(&cache_dir);
    fs::write(
        &transcript_export_path,
        format_transcript_with_timestamps(&transcript),
    )
    .await?;

    println!(
        "\n{} {}\n",
        style("Total time:").dim(),
        style(format_duration(total_start.elapsed())).cyan().bold()
    );

    println!(
        "{} {}",
        style("Report:").dim(),
        style(report_path.display()).cyan()
    );
    println!(
        "{} {}\n",
        style("Transcript:").dim(),
        style(transcript_export_path.display()).cyan()
    );
    println!("{}", style("─".repeat(60)).dim());

    // Human-readable output
    let readable = format_report_readable(&report);
    println!("{}", readable);

    Ok(())
}
