//! Sampled curves of the free response and their tabular export.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::errors::{Result, RlcError};
use crate::math::{peak_magnitude, Samples, Scalar};
use crate::oscillator::{Curve, DampedOscillator};
use crate::sampling::TimeGrid;

/// Time samples together with the three evaluated curves.
///
/// Every curve has the same length as the time axis; constructors enforce it.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveforms {
    times: Samples,
    capacitor_voltage: Samples,
    envelope_upper: Samples,
    envelope_lower: Samples,
}

impl Waveforms {
    /// Evaluates all curves of `oscillator` on `grid`.
    #[must_use]
    pub fn sample(oscillator: &DampedOscillator, grid: &TimeGrid) -> Self {
        let _span = tracing::info_span!("sample_waveforms", samples = grid.len()).entered();
        let times = grid.times();
        Self {
            times: times.clone(),
            capacitor_voltage: oscillator.capacitor_voltage_over(times),
            envelope_upper: oscillator.envelope_upper_over(times),
            envelope_lower: oscillator.envelope_lower_over(times),
        }
    }

    /// Bundles externally computed curves, checking each against the time axis.
    pub fn from_curves(
        times: Samples,
        capacitor_voltage: Samples,
        envelope_upper: Samples,
        envelope_lower: Samples,
    ) -> Result<Self> {
        let expected = times.len();
        for (curve, values) in [
            (Curve::CapacitorVoltage, &capacitor_voltage),
            (Curve::EnvelopeUpper, &envelope_upper),
            (Curve::EnvelopeLower, &envelope_lower),
        ] {
            if values.len() != expected {
                return Err(RlcError::LengthMismatch {
                    curve: curve.column(),
                    expected,
                    found: values.len(),
                });
            }
        }
        Ok(Self {
            times,
            capacitor_voltage,
            envelope_upper,
            envelope_lower,
        })
    }

    /// Sample times in seconds.
    #[must_use]
    pub fn times(&self) -> &Samples {
        &self.times
    }

    /// Capacitor voltage u_C(t) in volts.
    #[must_use]
    pub fn capacitor_voltage(&self) -> &Samples {
        &self.capacitor_voltage
    }

    /// Upper envelope e₊(t) in volts.
    #[must_use]
    pub fn envelope_upper(&self) -> &Samples {
        &self.envelope_upper
    }

    /// Lower envelope e₋(t) in volts.
    #[must_use]
    pub fn envelope_lower(&self) -> &Samples {
        &self.envelope_lower
    }

    /// Total captured samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True if no samples recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Values of a single curve.
    #[must_use]
    pub fn curve(&self, curve: Curve) -> &Samples {
        match curve {
            Curve::CapacitorVoltage => &self.capacitor_voltage,
            Curve::EnvelopeUpper => &self.envelope_upper,
            Curve::EnvelopeLower => &self.envelope_lower,
        }
    }

    /// `(time, value)` pairs of a single curve.
    pub fn points(&self, curve: Curve) -> impl Iterator<Item = (Scalar, Scalar)> + Clone + '_ {
        self.times
            .as_slice()
            .iter()
            .copied()
            .zip(self.curve(curve).as_slice().iter().copied())
    }

    /// Time span covered by the samples.
    #[must_use]
    pub fn time_range(&self) -> (Scalar, Scalar) {
        let times = self.times.as_slice();
        match (times.first(), times.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => (0.0, 0.0),
        }
    }

    /// Largest absolute value over all curves.
    #[must_use]
    pub fn peak_voltage(&self) -> Scalar {
        Curve::ALL
            .iter()
            .map(|&c| peak_magnitude(self.curve(c).as_slice()))
            .fold(0.0, Scalar::max)
    }
}

/// Writes the sampled curves as CSV: `time,u_c,e_plus,e_minus`.
pub fn write_waveforms_csv<W: Write>(mut w: W, waveforms: &Waveforms) -> io::Result<()> {
    write!(w, "time")?;
    for curve in Curve::ALL {
        write!(w, ",{}", curve.column())?;
    }
    writeln!(w)?;
    let rows = waveforms
        .times
        .iter()
        .zip(waveforms.capacitor_voltage.iter())
        .zip(waveforms.envelope_upper.iter())
        .zip(waveforms.envelope_lower.iter());
    for (((time, u_c), e_plus), e_minus) in rows {
        writeln!(w, "{:.16e},{:.16e},{:.16e},{:.16e}", time, u_c, e_plus, e_minus)?;
    }
    Ok(())
}

/// Writes the sampled curves as CSV to `path`, replacing any existing file.
pub fn save_waveforms_csv(path: &Path, waveforms: &Waveforms) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_waveforms_csv(&mut writer, waveforms)?;
    writer.flush()?;
    tracing::info!(path = %path.display(), rows = waveforms.len(), "wrote waveform CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::oscillator::OscillatorParams;

    fn small() -> Waveforms {
        let osc = DampedOscillator::new(OscillatorParams::default()).expect("valid");
        let grid = osc.time_grid(5.0, 11).expect("valid grid");
        Waveforms::sample(&osc, &grid)
    }

    #[test]
    fn curves_share_time_axis_length() {
        let w = small();
        assert_eq!(w.len(), 11);
        for curve in Curve::ALL {
            assert_eq!(w.curve(curve).len(), w.len());
        }
        assert_eq!(w.time_range(), (0.0, 10.0));
    }

    #[test]
    fn peak_voltage_is_initial_envelope() {
        let w = small();
        assert_relative_eq!(w.peak_voltage(), w.envelope_upper()[0], epsilon = 1.0e-15);
        assert!(w.peak_voltage() > 5.0);
    }

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let w = small();
        let mut buf = Vec::new();
        write_waveforms_csv(&mut buf, &w).expect("write to Vec");
        let text = String::from_utf8(buf).expect("utf8");
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("time,u_c,e_plus,e_minus"));
        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), 11);
        let first: Vec<f64> = rows[0].split(',').map(|v| v.parse().expect("float")).collect();
        assert_eq!(first, vec![0.0, 5.0, w.envelope_upper()[0], w.envelope_lower()[0]]);
    }

    #[test]
    fn from_curves_rejects_short_curve() {
        let w = small();
        let short = w.capacitor_voltage().rows(0, 5).into_owned();
        let err = Waveforms::from_curves(
            w.times().clone(),
            short,
            w.envelope_upper().clone(),
            w.envelope_lower().clone(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RlcError::LengthMismatch { curve: "u_c", expected: 11, found: 5 }
        ));
    }

    #[test]
    fn from_curves_round_trips_sampled_bundle() {
        let w = small();
        let rebuilt = Waveforms::from_curves(
            w.times().clone(),
            w.capacitor_voltage().clone(),
            w.envelope_upper().clone(),
            w.envelope_lower().clone(),
        )
        .expect("matching lengths");
        assert_eq!(rebuilt, w);
    }
}
