//! Confirmation watcher for the capture phase.
//!
//! A dedicated thread blocks on stdin until the user submits a line, then
//! raises the stop signal.

use std::io::{self, BufRead};
use std::thread;

use super::StopSignal;

/// Spawns the thread that waits for the user to press Enter.
///
/// Any outcome of the blocking read raises the stop signal: a submitted
/// line is the normal confirmation, while EOF (stdin closed, no interactive
/// terminal) and read errors are logged and still end the capture phase,
/// since without stdin there is no other way to stop recording.
pub fn spawn_watcher(stop: StopSignal) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        println!("Press Enter to stop recording...");

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => {
                tracing::warn!(
                    "stdin closed before confirmation; stopping capture \
                     (an interactive terminal is expected)"
                );
            }
            Ok(_) => {
                tracing::debug!("Enter received: stopping capture");
            }
            Err(e) => {
                tracing::warn!("Failed to read confirmation from stdin: {}", e);
            }
        }

        stop.set();
    })
}
