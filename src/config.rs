//! Run configuration: what to compute, where to write it.

use std::path::PathBuf;

use crate::constants::{DEFAULT_SAMPLE_COUNT, DEFAULT_SPAN_DECAY_TIMES};
use crate::errors::Result;
use crate::oscillator::{DampedOscillator, OscillatorParams};
use crate::plot::{self, PlotStyle};
use crate::waveform::{save_waveforms_csv, Waveforms};

/// Default chart file name.
pub const DEFAULT_OUTPUT: &str = "rlc_envelope.svg";

/// Everything needed for one chart.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Circuit parameters.
    pub params: OscillatorParams,
    /// Number of time samples.
    pub sample_count: usize,
    /// Sampled window length, in decay times.
    pub span_decay_times: f64,
    /// Chart output path (SVG).
    pub output: PathBuf,
    /// Optional CSV export of the sampled curves.
    pub csv: Option<PathBuf>,
    /// Chart styling.
    pub style: PlotStyle,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            params: OscillatorParams::default(),
            sample_count: DEFAULT_SAMPLE_COUNT,
            span_decay_times: DEFAULT_SPAN_DECAY_TIMES,
            output: PathBuf::from(DEFAULT_OUTPUT),
            csv: None,
            style: PlotStyle::default(),
        }
    }
}

impl RunConfig {
    /// Default configuration writing the chart to `output`.
    #[must_use]
    pub fn with_output(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }

    /// Builds the oscillator and samples its curves.
    pub fn sample(&self) -> Result<(DampedOscillator, Waveforms)> {
        let oscillator = DampedOscillator::new(self.params)?;
        let grid = oscillator.time_grid(self.span_decay_times, self.sample_count)?;
        let waveforms = Waveforms::sample(&oscillator, &grid);
        Ok((oscillator, waveforms))
    }

    /// Computes the curves and writes the chart (and CSV when requested).
    pub fn run(&self) -> Result<Waveforms> {
        let _span = tracing::info_span!("run", output = %self.output.display()).entered();
        let (oscillator, waveforms) = self.sample()?;
        tracing::info!(
            tau = oscillator.tau(),
            omega = oscillator.damped_angular_frequency(),
            a = oscillator.a(),
            b = oscillator.b(),
            samples = waveforms.len(),
            "evaluated free response"
        );

        plot::render_svg(&self.output, &waveforms, &self.style)?;
        if let Some(csv) = &self.csv {
            save_waveforms_csv(csv, &waveforms)?;
        }
        Ok(waveforms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RlcError;

    #[test]
    fn defaults_describe_reference_chart() {
        let config = RunConfig::default();
        assert_eq!(config.sample_count, 10_000);
        assert_eq!(config.span_decay_times, 5.0);
        assert_eq!(config.output, PathBuf::from("rlc_envelope.svg"));
        assert!(config.csv.is_none());
    }

    #[test]
    fn sample_spans_five_decay_times() {
        let (osc, waveforms) = RunConfig::default().sample().expect("valid defaults");
        assert_eq!(waveforms.len(), 10_000);
        assert_eq!(waveforms.time_range(), (0.0, 5.0 * osc.tau()));
    }

    #[test]
    fn sample_propagates_parameter_errors() {
        let config = RunConfig {
            params: OscillatorParams::new(10.0, 0.25, 5.0),
            ..RunConfig::default()
        };
        assert!(matches!(config.sample(), Err(RlcError::NotUnderdamped { .. })));
    }
}
