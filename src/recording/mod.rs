//! Audio recording feature for voxnote.
//!
//! Owns the capture phase: the one-shot stop signal, the raw PCM buffer,
//! the microphone recorder, and the two helper threads (Enter watcher and
//! progress spinner) that run alongside the capture loop.

pub mod audio;
pub mod input;
pub mod progress;

pub use audio::AudioRecorder;

use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Samples captured per second.
pub const SAMPLE_RATE: u32 = 16_000;
/// Input channel count. Capture is always mono.
pub const CHANNELS: u16 = 1;
/// Bytes per sample (16-bit signed PCM).
pub const SAMPLE_WIDTH: u16 = 2;
/// Frames delivered per device read.
pub const CHUNK_FRAMES: u32 = 1024;

/// How often the capture loop re-checks the stop signal.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// One-shot broadcast flag that ends the capture phase.
///
/// Set exactly once (setting it again is a no-op) and polled cooperatively
/// by the capture loop, the input watcher, and the progress spinner.
#[derive(Clone, Debug, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag. Idempotent.
    pub fn set(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Frozen capture output: little-endian 16-bit mono PCM plus the parameters
/// the stream was opened with.
///
/// Appended to only by the device callback during capture; once returned
/// from [`record`] it is read-only for the writer, transcriber, and plotter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAudio {
    data: Vec<u8>,
    sample_rate: u32,
    sample_width: u16,
}

impl RawAudio {
    pub fn new(data: Vec<u8>, sample_rate: u32, sample_width: u16) -> Self {
        Self {
            data,
            sample_rate,
            sample_width,
        }
    }

    /// Raw PCM bytes, little-endian.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Decodes the buffer as signed 16-bit samples.
    ///
    /// An odd trailing byte is silently truncated.
    pub fn samples(&self) -> Vec<i16> {
        self.data
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect()
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn sample_width(&self) -> u16 {
        self.sample_width
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn duration_secs(&self) -> f32 {
        let frame_bytes = self.sample_width as usize;
        if frame_bytes == 0 {
            return 0.0;
        }
        (self.data.len() / frame_bytes) as f32 / self.sample_rate as f32
    }
}

/// Records from the default microphone until the user presses Enter.
///
/// Opens the input stream (fatal on failure), spawns the Enter watcher and
/// the spinner, then polls the stop signal. The device callback may append
/// at most one more chunk after the flag is raised; capture is not
/// preemptible mid-read. Both helper threads are joined before returning so
/// nothing leaks into the later phases.
///
/// # Errors
/// - If no input device is available or the stream cannot be opened
pub fn record() -> Result<RawAudio> {
    let stop = StopSignal::new();

    let recorder = AudioRecorder::open()?;

    let watcher = input::spawn_watcher(stop.clone());
    let spinner = progress::spawn_spinner(stop.clone());

    while !stop.is_set() {
        thread::sleep(POLL_INTERVAL);
    }

    let audio = recorder.finish();

    if watcher.join().is_err() {
        tracing::warn!("Input watcher thread panicked");
    }
    if spinner.join().is_err() {
        tracing::warn!("Progress spinner thread panicked");
    }

    tracing::info!(
        "Capture finished: {:.2}s ({} bytes at {}Hz)",
        audio.duration_secs(),
        audio.data().len(),
        audio.sample_rate()
    );

    Ok(audio)
}
