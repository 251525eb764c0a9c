//! Default parameters of the plotted circuit and sampling constants.
//!
//! ## Circuit
//!
//! The series RLC free response is fully described by its natural angular
//! frequency ω₀ = 1/√(LC) and its quality factor Q = (1/R)·√(L/C). The
//! capacitor starts charged to E₀ with no current flowing through the loop.
//!
//! ## Sampling
//!
//! The response is sampled over five decay times, after which the envelope
//! has fallen below 1 % of its initial value (e⁻⁵ ≈ 0.0067).

use std::f64::consts::TAU;

/// Natural angular frequency ω₀ in radians per second (rad/s).
pub const DEFAULT_OMEGA_0: f64 = 10.0;
/// Quality factor Q (dimensionless).
pub const DEFAULT_QUALITY_FACTOR: f64 = 10.0;
/// Initial capacitor voltage E₀ in volts (V).
pub const DEFAULT_INITIAL_VOLTAGE: f64 = 5.0;

/// Quality factor at critical damping. The pseudo-periodic regime requires Q > 1/2.
pub const CRITICAL_QUALITY_FACTOR: f64 = 0.5;

/// Number of time samples used for the chart.
pub const DEFAULT_SAMPLE_COUNT: usize = 10_000;
/// Length of the sampled window, in decay times τ.
pub const DEFAULT_SPAN_DECAY_TIMES: f64 = 5.0;

/// Returns the period in seconds of an oscillation at angular frequency `omega` (rad/s).
#[inline]
#[must_use]
pub fn period_from_angular_frequency(omega: f64) -> f64 {
    TAU / omega
}
