//! Waveform file output.
//!
//! Serializes the captured PCM buffer as an uncompressed mono WAV file,
//! overwriting any existing file at the target path. Empty buffers produce
//! a valid header-only file.

use anyhow::Result;
use hound::WavWriter;
use std::path::Path;

use crate::recording::{RawAudio, CHANNELS};

/// Fixed output filename, relative to the current working directory.
pub const AUDIO_FILENAME: &str = "my_audio.wav";

/// Writes the recorded audio to `path` as 16-bit mono PCM WAV.
///
/// # Errors
/// - If the file cannot be created or written
pub fn save_audio(audio: &RawAudio, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let wav_spec = hound::WavSpec {
        channels: CHANNELS,
        sample_rate: audio.sample_rate(),
        bits_per_sample: audio.sample_width() * 8,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, wav_spec)?;
    for sample in audio.samples() {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    tracing::info!(
        "Audio saved: {} ({:.2}s, {} bytes of PCM)",
        path.display(),
        audio.duration_secs(),
        audio.data().len()
    );
    println!("Audio saved to: {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{SAMPLE_RATE, SAMPLE_WIDTH};

    fn audio_from_samples(samples: &[i16]) -> RawAudio {
        let data: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        RawAudio::new(data, SAMPLE_RATE, SAMPLE_WIDTH)
    }

    #[test]
    fn header_declares_mono_16bit_16khz() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");

        // 3 chunks of 1024 frames.
        let samples: Vec<i16> = (0..3072).map(|i| (i % 256) as i16).collect();
        save_audio(&audio_from_samples(&samples), &path).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_rate, 16_000);
        assert_eq!(reader.len(), 3072);
    }

    #[test]
    fn saved_samples_round_trip_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");

        let samples = vec![0i16, 1, -1, i16::MAX, i16::MIN];
        save_audio(&audio_from_samples(&samples), &path).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let read: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read, samples);
    }

    #[test]
    fn save_is_byte_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.wav");
        let second = dir.path().join("b.wav");

        let audio = audio_from_samples(&[100, -200, 300, -400]);
        save_audio(&audio, &first).unwrap();
        save_audio(&audio, &second).unwrap();

        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap()
        );
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");

        save_audio(&audio_from_samples(&[1, 2, 3, 4]), &path).unwrap();
        save_audio(&audio_from_samples(&[9]), &path).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.len(), 1);
    }

    #[test]
    fn empty_buffer_produces_header_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.wav");

        save_audio(&audio_from_samples(&[]), &path).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.len(), 0);
        assert_eq!(reader.spec().sample_rate, 16_000);
    }
}
