//! Microphone capture via cpal.
//!
//! Opens the system default input device with fixed parameters (mono,
//! 16 kHz, 16-bit signed PCM, 1024-frame buffers) and appends every chunk
//! the device delivers to a shared byte buffer until the recorder is
//! consumed.

use anyhow::{anyhow, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::{Arc, Mutex};

use super::{RawAudio, CHANNELS, CHUNK_FRAMES, SAMPLE_RATE, SAMPLE_WIDTH};

/// Records PCM audio from the default input device.
///
/// The stream handle is held for the recorder's lifetime; dropping the
/// recorder (or calling [`AudioRecorder::finish`]) stops capture and
/// releases the device, including on error paths.
pub struct AudioRecorder {
    /// Recorded audio bytes (little-endian i16 PCM mono)
    data: Arc<Mutex<Vec<u8>>>,
    /// Active audio input stream (kept alive during recording)
    stream: cpal::Stream,
}

impl AudioRecorder {
    /// Opens the default input device and starts capturing.
    ///
    /// # Errors
    /// - If no audio input device is available
    /// - If the stream cannot be built with the fixed capture parameters
    /// - If the stream fails to start
    pub fn open() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_input_device()
            .ok_or_else(|| anyhow!("No audio input device available"))?;

        let device_name = device
            .name()
            .unwrap_or_else(|_| "Unknown device".to_string());
        tracing::info!("Recording device: {}", device_name);

        let config = cpal::StreamConfig {
            channels: CHANNELS,
            sample_rate: cpal::SampleRate(SAMPLE_RATE),
            buffer_size: cpal::BufferSize::Fixed(CHUNK_FRAMES),
        };

        let data = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&data);

        let stream = device.build_input_stream(
            &config,
            move |chunk: &[i16], _: &cpal::InputCallbackInfo| {
                append_chunk(&sink, chunk);
            },
            |err| {
                tracing::error!("Audio stream error: {}", err);
            },
            None,
        )?;

        stream.play()?;
        tracing::debug!(
            "Audio stream started: {}Hz, {} channel(s), {}-frame buffers",
            SAMPLE_RATE,
            CHANNELS,
            CHUNK_FRAMES
        );

        Ok(Self { data, stream })
    }

    /// Stops capture, releases the device, and freezes the buffer.
    pub fn finish(self) -> RawAudio {
        drop(self.stream);

        let data = std::mem::take(&mut *self.data.lock().unwrap());
        RawAudio::new(data, SAMPLE_RATE, SAMPLE_WIDTH)
    }
}

/// Appends one device chunk to the shared buffer, preserving sample order.
fn append_chunk(sink: &Arc<Mutex<Vec<u8>>>, chunk: &[i16]) {
    let mut data = sink.lock().unwrap();
    data.reserve(chunk.len() * SAMPLE_WIDTH as usize);
    for &sample in chunk {
        data.extend_from_slice(&sample.to_le_bytes());
    }
}
