//! Speech-to-text transcription.
//!
//! Sends the captured PCM buffer to the remote recognition service and
//! classifies the outcome. Failures are terminal for this component only;
//! the caller reports them and moves on.

pub mod api;

pub use api::transcribe;

use anyhow::Result;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Fixed transcript filename, relative to the current working directory.
pub const TRANSCRIPT_FILENAME: &str = "my_transcript.txt";

/// Classified transcription failures.
///
/// The `Display` strings are the exact console lines shown to the user.
#[derive(Debug, Error)]
pub enum TranscribeError {
    /// The service answered but found no recognizable speech.
    #[error("Error: AI could not understand the audio.")]
    Unrecognized,

    /// The bounded request timeout expired.
    #[error("API Error: recognition request timed out")]
    Timeout,

    /// The request failed: connectivity, rate limiting, or a malformed
    /// response.
    #[error("API Error: {0}")]
    Request(String),
}

/// Writes the recognized text to `path`, overwriting any prior content.
///
/// # Errors
/// - If the file cannot be written
pub fn save_transcript(text: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, text)?;

    tracing::info!("Transcript saved: {} ({} chars)", path.display(), text.len());
    println!("Transcription saved to: {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_message_is_the_exact_console_literal() {
        assert_eq!(
            TranscribeError::Unrecognized.to_string(),
            "Error: AI could not understand the audio."
        );
    }

    #[test]
    fn request_errors_carry_the_api_error_prefix() {
        let err = TranscribeError::Request("rate limited".to_string());
        assert_eq!(err.to_string(), "API Error: rate limited");
    }

    #[test]
    fn transcript_file_contains_exactly_the_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.txt");

        save_transcript("hello world", &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello world");
    }

    #[test]
    fn save_transcript_overwrites_prior_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.txt");

        save_transcript("first take, much longer than the second", &path).unwrap();
        save_transcript("second", &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }
}
