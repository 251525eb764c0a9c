//! Convenience re-exports for evaluating and plotting the free response.

pub use crate::config::{RunConfig, DEFAULT_OUTPUT};
pub use crate::constants::*;
pub use crate::errors::{Result, RlcError};
pub use crate::math::{CScalar, Samples, Scalar};
pub use crate::oscillator::{Curve, DampedOscillator, OscillatorParams};
pub use crate::plot::{draw_chart, render_svg, render_svg_string, LinePattern, PlotStyle};
pub use crate::sampling::{linspace, TimeGrid};
pub use crate::waveform::{save_waveforms_csv, write_waveforms_csv, Waveforms};
