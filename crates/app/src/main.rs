use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;

use fieldvoice_speech::engines::{ScriptedDriver, ScriptedEngineFactory, UnavailableEngineFactory};
use fieldvoice_speech::{
    EngineRegistry, Presentation, RecorderConfig, ResultSegment, VoiceRecorder,
};

mod config;

/// Preview length for the compact inline affordance.
const COMPACT_PREVIEW_CHARS: usize = 30;
const FULL_PREVIEW_CHARS: usize = 60;

#[derive(Parser, Debug)]
#[command(name = "fieldvoice", about = "Voice dictation capture demo")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, env = "FIELDVOICE_CONFIG")]
    config: Option<PathBuf>,

    /// Transcript file to replay, one utterance per line
    #[arg(long)]
    transcript: Option<PathBuf>,

    /// Only report final segments (no live preview)
    #[arg(long)]
    final_only: bool,

    /// Render as the compact inline affordance
    #[arg(long)]
    compact: bool,

    /// Simulate a host without speech recognition
    #[arg(long)]
    unsupported: bool,
}

fn init_logging() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, "logs", "fieldvoice.log");
    let (non_blocking_file, _guard) = tracing_appender::non_blocking(file_appender);
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout.and(non_blocking_file))
        .with_env_filter(log_level)
        .init();
    std::mem::forget(_guard);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    let mut recorder_config = match &cli.config {
        Some(path) => config::load(path)?.recorder,
        None => RecorderConfig::default(),
    };
    if cli.final_only {
        recorder_config.interim_results = false;
    }
    let presentation = if cli.compact {
        Presentation::Compact
    } else {
        Presentation::Full
    };

    // --- 1. Capability detection ---
    let mut registry = EngineRegistry::new();
    let driver = if cli.unsupported {
        registry.register(Arc::new(UnavailableEngineFactory::default()));
        None
    } else {
        let factory = ScriptedEngineFactory::new();
        let driver = factory.driver();
        registry.register(Arc::new(factory));
        Some(driver)
    };
    let capability = registry.detect();

    // --- 2. Target field and recorder control ---
    let field = Arc::new(Mutex::new(String::new()));
    let sink_field = field.clone();
    let sink = move |text: &str| {
        // Join policy is the field owner's responsibility: the control
        // only delivers the newly finalized increment.
        let mut field = sink_field.lock().unwrap();
        if !field.is_empty() && !field.ends_with(' ') && !text.starts_with(' ') {
            field.push(' ');
        }
        field.push_str(text);
    };
    let mut recorder = VoiceRecorder::new(capability, recorder_config.clone(), sink)
        .with_presentation(presentation);

    if !recorder.is_supported() {
        // Compact mode renders nothing at all for unsupported hosts.
        if presentation == Presentation::Full {
            info!(target: "demo", "voice input not supported in this environment");
        }
        return Ok(());
    }

    // --- 3. Scripted dictation replay ---
    let Some(driver) = driver else {
        bail!("engine available but no scripted driver attached");
    };
    let utterances = load_transcript(cli.transcript.as_deref())?;
    let preview_chars = match presentation {
        Presentation::Compact => COMPACT_PREVIEW_CHARS,
        Presentation::Full => FULL_PREVIEW_CHARS,
    };

    recorder.toggle();
    info!(target: "demo", lang = %recorder.config().lang, "listening");

    let mut finalized: Vec<String> = Vec::new();
    for line in &utterances {
        if recorder_config.interim_results {
            let words: Vec<&str> = line.split_whitespace().collect();
            for n in 1..words.len() {
                let prefix = words[..n].join(" ");
                emit_current(&driver, &finalized, ResultSegment::interim(prefix));
                recorder.pump();
                info!(
                    target: "demo",
                    live = %preview(recorder.live_text(), preview_chars),
                    "listening…"
                );
                tokio::time::sleep(Duration::from_millis(120)).await;
            }
        }
        emit_current(&driver, &finalized, ResultSegment::finalized(line.clone()));
        recorder.pump();
        finalized.push(line.clone());
        info!(target: "demo", field = %field.lock().unwrap(), "field updated");
    }

    recorder.toggle();

    // --- 4. Summary ---
    let metrics = recorder.metrics();
    info!(
        target: "demo",
        field = %field.lock().unwrap(),
        events = metrics.events_in,
        interim = metrics.interim_count,
        finals = metrics.final_count,
        "dictation finished"
    );

    Ok(())
}

/// Replay one engine callback: the accumulated finalized segments plus
/// the current in-progress segment, with the result index marking where
/// the novel segment begins.
fn emit_current(driver: &ScriptedDriver, finalized: &[String], current: ResultSegment) {
    let mut segments: Vec<ResultSegment> = finalized
        .iter()
        .map(|text| ResultSegment::finalized(text.clone()))
        .collect();
    let result_index = segments.len();
    segments.push(current);
    driver.emit_result(result_index, segments);
}

fn load_transcript(path: Option<&std::path::Path>) -> anyhow::Result<Vec<String>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read transcript {}", path.display()))?;
            let lines: Vec<String> = raw
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            if lines.is_empty() {
                bail!("transcript {} contains no utterances", path.display());
            }
            Ok(lines)
        }
        None => Ok(vec![
            "switch the team to quarterly planning".to_string(),
            "hire a second platform engineer".to_string(),
            "sunset the legacy billing integration".to_string(),
        ]),
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}…")
    }
}
