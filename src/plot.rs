//! Waveform chart viewer.
//!
//! Renders the recorded buffer as an amplitude-vs-time line chart in the
//! alternate screen and blocks until the user presses any key. One chart
//! point per sample, at `i / rate` seconds.

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};
use std::error::Error;
use std::io::{stdout, Stdout};

use crate::recording::RawAudio;

/// Builds the chart dataset: one `(time, amplitude)` point per sample.
///
/// The time axis spans `[0, len/rate)` with exactly `len` points.
pub fn plot_points(samples: &[i16], rate: u32) -> Vec<(f64, f64)> {
    samples
        .iter()
        .enumerate()
        .map(|(i, &sample)| (i as f64 / rate as f64, sample as f64))
        .collect()
}

/// Full-screen terminal viewer for the waveform chart.
pub struct WaveformViewer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl WaveformViewer {
    /// Enters the alternate screen and enables raw mode.
    ///
    /// # Errors
    /// - If raw mode cannot be enabled
    /// - If the alternate screen cannot be entered
    pub fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(WaveformViewer { terminal })
    }

    /// Draws the chart and blocks until the user presses any key.
    ///
    /// Redraws on terminal resize. An empty buffer renders a degenerate
    /// (empty) chart rather than failing.
    ///
    /// # Errors
    /// - If rendering or event reading fails
    pub fn show(&mut self, audio: &RawAudio) -> Result<(), Box<dyn Error>> {
        let samples = audio.samples();
        let points = plot_points(&samples, audio.sample_rate());
        let duration = samples.len() as f64 / audio.sample_rate() as f64;

        loop {
            self.terminal
                .draw(|frame| render_chart(frame, &points, duration))?;

            match event::read()? {
                Event::Key(_) => break,
                Event::Resize(_, _) => continue,
                _ => {}
            }
        }

        Ok(())
    }

    /// Leaves the alternate screen and restores the terminal.
    pub fn cleanup(&mut self) -> Result<(), Box<dyn Error>> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            crossterm::terminal::LeaveAlternateScreen
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

/// Renders the amplitude-vs-time chart across the whole frame.
fn render_chart(frame: &mut Frame, points: &[(f64, f64)], duration: f64) {
    // A zero-width x axis renders nothing useful; give empty recordings a
    // nominal one-second span.
    let x_max = if duration > 0.0 { duration } else { 1.0 };

    let dataset = Dataset::default()
        .name("amplitude")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Blue))
        .data(points);

    let x_axis = Axis::default()
        .title("Time (seconds)")
        .style(Style::default().fg(Color::DarkGray))
        .bounds([0.0, x_max])
        .labels([
            "0.00".to_string(),
            format!("{:.2}", x_max / 2.0),
            format!("{:.2}", x_max),
        ]);

    let y_axis = Axis::default()
        .title("Amplitude")
        .style(Style::default().fg(Color::DarkGray))
        .bounds([i16::MIN as f64, i16::MAX as f64])
        .labels([
            i16::MIN.to_string(),
            "0".to_string(),
            i16::MAX.to_string(),
        ]);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title("Voice Waveform Visualization  (press any key to close)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, frame.area());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_point_per_sample() {
        let samples: Vec<i16> = (0..3072).map(|i| (i % 100) as i16).collect();
        let points = plot_points(&samples, 16_000);
        assert_eq!(points.len(), samples.len());
    }

    #[test]
    fn time_axis_spans_half_open_interval() {
        let samples = vec![0i16; 16_000];
        let points = plot_points(&samples, 16_000);

        assert_eq!(points.first().unwrap().0, 0.0);
        // Last point lands strictly before len/rate seconds.
        let last = points.last().unwrap().0;
        assert!(last < 1.0);
        assert!((last - 15_999.0 / 16_000.0).abs() < 1e-12);
    }

    #[test]
    fn amplitudes_carry_through_unscaled() {
        let points = plot_points(&[i16::MIN, 0, i16::MAX], 16_000);
        let amplitudes: Vec<f64> = points.iter().map(|p| p.1).collect();
        assert_eq!(amplitudes, vec![-32768.0, 0.0, 32767.0]);
    }

    #[test]
    fn empty_samples_produce_empty_dataset() {
        assert!(plot_points(&[], 16_000).is_empty());
    }
}
