//! Closed-form free response of an underdamped series RLC circuit.
//!
//! With the capacitor charged to E₀ and no initial loop current, the capacitor
//! voltage is
//!
//! ```text
//! u_C(t) = exp(-t/τ) · (A·cos(Ωt) + B·sin(Ωt))
//! τ = 2Q/ω₀,   Ω = (ω₀/2Q)·√(4Q² − 1),   A = E₀,   B = E₀/(Ωτ)
//! ```
//!
//! bounded by the exponential envelopes `±exp(-t/τ)·√(A² + B²)`.

use std::fmt;

use crate::constants::{
    period_from_angular_frequency, CRITICAL_QUALITY_FACTOR, DEFAULT_INITIAL_VOLTAGE,
    DEFAULT_OMEGA_0, DEFAULT_QUALITY_FACTOR,
};
use crate::errors::{Result, RlcError};
use crate::math::{complex_exp, CScalar, Samples, Scalar};
use crate::sampling::TimeGrid;

/// Physical parameters of the circuit, in SI units.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorParams {
    /// Natural angular frequency ω₀ in rad/s.
    pub omega_0: Scalar,
    /// Quality factor Q (dimensionless).
    pub quality_factor: Scalar,
    /// Initial capacitor voltage E₀ in volts.
    pub initial_voltage: Scalar,
}

impl OscillatorParams {
    /// Creates a parameter set.
    #[must_use]
    pub const fn new(omega_0: Scalar, quality_factor: Scalar, initial_voltage: Scalar) -> Self {
        Self {
            omega_0,
            quality_factor,
            initial_voltage,
        }
    }
}

impl Default for OscillatorParams {
    fn default() -> Self {
        Self::new(
            DEFAULT_OMEGA_0,
            DEFAULT_QUALITY_FACTOR,
            DEFAULT_INITIAL_VOLTAGE,
        )
    }
}

/// The three curves drawn on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// Capacitor voltage u_C(t).
    CapacitorVoltage,
    /// Upper exponential envelope e₊(t).
    EnvelopeUpper,
    /// Lower exponential envelope e₋(t) = −e₊(t).
    EnvelopeLower,
}

impl Curve {
    /// All curves in drawing order.
    pub const ALL: [Self; 3] = [
        Self::CapacitorVoltage,
        Self::EnvelopeUpper,
        Self::EnvelopeLower,
    ];

    /// Legend label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CapacitorVoltage => "u_C(t)",
            Self::EnvelopeUpper => "e_+(t)",
            Self::EnvelopeLower => "e_-(t)",
        }
    }

    /// Column name used for tabular export.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::CapacitorVoltage => "u_c",
            Self::EnvelopeUpper => "e_plus",
            Self::EnvelopeLower => "e_minus",
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Underdamped series RLC oscillator with its derived constants precomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampedOscillator {
    params: OscillatorParams,
    tau: Scalar,
    omega: Scalar,
    a: Scalar,
    b: Scalar,
}

impl DampedOscillator {
    /// Derives τ, Ω, A and B from `params`.
    ///
    /// Fails with [`RlcError::NotUnderdamped`] when Q ≤ 1/2 and with
    /// [`RlcError::InvalidParameter`] for non-finite values or ω₀ ≤ 0.
    pub fn new(params: OscillatorParams) -> Result<Self> {
        let OscillatorParams {
            omega_0,
            quality_factor: q,
            initial_voltage: e_0,
        } = params;

        if !omega_0.is_finite() || omega_0 <= 0.0 {
            return Err(RlcError::InvalidParameter {
                name: "omega_0",
                value: omega_0,
            });
        }
        if !q.is_finite() {
            return Err(RlcError::InvalidParameter {
                name: "quality_factor",
                value: q,
            });
        }
        if !e_0.is_finite() {
            return Err(RlcError::InvalidParameter {
                name: "initial_voltage",
                value: e_0,
            });
        }
        if q <= CRITICAL_QUALITY_FACTOR {
            return Err(RlcError::NotUnderdamped { quality_factor: q });
        }

        let tau = 2.0 * q / omega_0;
        let omega = omega_0 / (2.0 * q) * (4.0 * q * q - 1.0).sqrt();
        let a = e_0;
        let b = e_0 / (omega * tau);

        tracing::debug!(tau, omega, a, b, "derived oscillator constants");

        Ok(Self {
            params,
            tau,
            omega,
            a,
            b,
        })
    }

    /// Parameters the oscillator was built from.
    #[must_use]
    pub const fn params(&self) -> &OscillatorParams {
        &self.params
    }

    /// Decay time τ = 2Q/ω₀ in seconds.
    #[must_use]
    pub const fn tau(&self) -> Scalar {
        self.tau
    }

    /// Damped angular frequency Ω in rad/s.
    #[must_use]
    pub const fn damped_angular_frequency(&self) -> Scalar {
        self.omega
    }

    /// Cosine coefficient A = E₀.
    #[must_use]
    pub const fn a(&self) -> Scalar {
        self.a
    }

    /// Sine coefficient B = E₀/(Ωτ).
    #[must_use]
    pub const fn b(&self) -> Scalar {
        self.b
    }

    /// Envelope amplitude √(A² + B²).
    #[must_use]
    pub fn envelope_amplitude(&self) -> Scalar {
        self.a.hypot(self.b)
    }

    /// Damping ratio ζ = 1/(2Q).
    #[must_use]
    pub fn damping_ratio(&self) -> Scalar {
        1.0 / (2.0 * self.params.quality_factor)
    }

    /// Pseudo-period 2π/Ω in seconds.
    #[must_use]
    pub fn pseudo_period(&self) -> Scalar {
        period_from_angular_frequency(self.omega)
    }

    /// Complex amplitude A − jB, so that u_C(t) = Re[(A − jB)·e^{st}] with s = −1/τ + jΩ.
    #[must_use]
    pub fn amplitude_phasor(&self) -> CScalar {
        CScalar::new(self.a, -self.b)
    }

    /// Characteristic roots −1/τ ± jΩ of the free response.
    #[must_use]
    pub fn characteristic_roots(&self) -> (CScalar, CScalar) {
        let s = CScalar::new(-1.0 / self.tau, self.omega);
        (s, s.conj())
    }

    /// Capacitor voltage u_C(t) in volts.
    #[must_use]
    pub fn capacitor_voltage(&self, t: Scalar) -> Scalar {
        let (sin, cos) = (self.omega * t).sin_cos();
        (-t / self.tau).exp() * (self.a * cos + self.b * sin)
    }

    /// Capacitor voltage evaluated through the complex exponential form.
    #[must_use]
    pub fn capacitor_voltage_phasor(&self, t: Scalar) -> Scalar {
        let (s, _) = self.characteristic_roots();
        (self.amplitude_phasor() * complex_exp(s, t)).re
    }

    /// Upper envelope e₊(t) = exp(−t/τ)·√(A² + B²).
    #[must_use]
    pub fn envelope_upper(&self, t: Scalar) -> Scalar {
        (-t / self.tau).exp() * self.envelope_amplitude()
    }

    /// Lower envelope e₋(t) = −e₊(t).
    #[must_use]
    pub fn envelope_lower(&self, t: Scalar) -> Scalar {
        -self.envelope_upper(t)
    }

    /// Evaluates `curve` at a single time.
    #[must_use]
    pub fn evaluate(&self, curve: Curve, t: Scalar) -> Scalar {
        match curve {
            Curve::CapacitorVoltage => self.capacitor_voltage(t),
            Curve::EnvelopeUpper => self.envelope_upper(t),
            Curve::EnvelopeLower => self.envelope_lower(t),
        }
    }

    /// Evaluates `curve` elementwise; the result has the same length as `times`.
    #[must_use]
    pub fn evaluate_over(&self, curve: Curve, times: &Samples) -> Samples {
        times.map(|t| self.evaluate(curve, t))
    }

    /// Elementwise [`Self::capacitor_voltage`].
    #[must_use]
    pub fn capacitor_voltage_over(&self, times: &Samples) -> Samples {
        self.evaluate_over(Curve::CapacitorVoltage, times)
    }

    /// Elementwise [`Self::envelope_upper`].
    #[must_use]
    pub fn envelope_upper_over(&self, times: &Samples) -> Samples {
        self.evaluate_over(Curve::EnvelopeUpper, times)
    }

    /// Elementwise [`Self::envelope_lower`].
    #[must_use]
    pub fn envelope_lower_over(&self, times: &Samples) -> Samples {
        self.evaluate_over(Curve::EnvelopeLower, times)
    }

    /// Time grid of `count` samples over [0, `span_decay_times`·τ].
    pub fn time_grid(&self, span_decay_times: Scalar, count: usize) -> Result<TimeGrid> {
        TimeGrid::over_decay_times(self.tau, span_decay_times, count)
    }
}
