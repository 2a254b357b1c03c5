//! Recording progress spinner.
//!
//! Purely cosmetic: a dedicated thread overwrites one console line with a
//! rotating symbol every 100 ms until the stop signal is raised, then
//! prints a completion message. Write failures are ignored.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use super::StopSignal;

const SPINNER_CHARS: [char; 4] = ['|', '/', '-', '\\'];
const SPINNER_PERIOD: Duration = Duration::from_millis(100);

/// Spawns the spinner thread for the capture phase.
pub fn spawn_spinner(stop: StopSignal) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut out = io::stdout();
        let mut tick = 0usize;

        while !stop.is_set() {
            let _ = write!(out, "\rRecording... {}", spinner_char(tick));
            let _ = out.flush();
            tick += 1;
            thread::sleep(SPINNER_PERIOD);
        }

        // Trailing spaces clear the spinner symbol.
        println!("\rRecording complete!            ");
    })
}

fn spinner_char(tick: usize) -> char {
    SPINNER_CHARS[tick % SPINNER_CHARS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_rotates_through_four_symbols() {
        let rendered: Vec<char> = (0..8).map(spinner_char).collect();
        assert_eq!(rendered[..4], ['|', '/', '-', '\\']);
        assert_eq!(rendered[..4], rendered[4..]);
    }

    #[test]
    fn spinner_exits_once_stop_is_set() {
        let stop = StopSignal::new();
        let handle = spawn_spinner(stop.clone());

        stop.set();
        handle.join().unwrap();
    }
}
