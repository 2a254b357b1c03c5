//! Application orchestration.
//!
//! Parses the (argument-less) command line and runs the pipeline in strict
//! sequence: capture, save, transcribe, plot. Transcription failures are
//! reported without stopping the pipeline; only a capture-device failure
//! aborts the run.

use anyhow::{anyhow, Result};
use clap::Parser;

use crate::logging;
use crate::plot::WaveformViewer;
use crate::recording;
use crate::recording::RawAudio;
use crate::transcription::{self, TranscribeError};
use crate::wav;

/// Record your voice, transcribe it, and see the waveform
#[derive(Parser)]
#[command(name = "voxnote")]
#[command(version)]
#[command(
    about = "Record microphone audio, transcribe it with a remote recognition\n\
             service, and display the waveform. Press Enter to stop recording."
)]
struct Cli {}

/// Runs the full pipeline.
///
/// # Errors
/// - If logging initialization fails
/// - If the audio input device is unavailable or fails to open
/// - If the waveform file cannot be written
/// - If the terminal cannot host the waveform viewer
pub async fn run() -> Result<()> {
    let _cli = Cli::parse();

    logging::init_logging()?;
    tracing::info!("=== voxnote started ===");

    print_banner();

    let audio = recording::record()?;

    wav::save_audio(&audio, wav::AUDIO_FILENAME)?;

    match transcription::transcribe(&audio).await {
        Ok(text) => {
            println!("Transcription: {text}");
            transcription::save_transcript(&text, transcription::TRANSCRIPT_FILENAME)?;
        }
        Err(e @ TranscribeError::Unrecognized) => {
            tracing::warn!("Recognition found no speech in the audio");
            println!("{e}");
        }
        Err(e) => {
            tracing::error!("Transcription failed: {e}");
            println!("{e}");
        }
    }

    show_waveform(&audio)?;

    tracing::info!("=== voxnote exited successfully ===");
    Ok(())
}

/// Opens the chart viewer, blocks until dismissed, and restores the
/// terminal on every path.
fn show_waveform(audio: &RawAudio) -> Result<()> {
    let mut viewer = WaveformViewer::new()
        .map_err(|e| anyhow!("Failed to initialize waveform viewer: {e}"))?;

    let shown = viewer.show(audio);

    viewer
        .cleanup()
        .map_err(|e| anyhow!("Failed to restore terminal: {e}"))?;

    shown.map_err(|e| anyhow!("Failed to render waveform: {e}"))
}

fn print_banner() {
    println!("{}", "=".repeat(40));
    println!("MY VOICE, MY WORDS: VOICE-TO-TEXT");
    println!("{}", "=".repeat(40));
    println!();
    println!("Starting recording now...");
}
