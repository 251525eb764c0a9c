//! Evenly spaced time sampling over a closed interval.

use nalgebra::DVector;

use crate::errors::{Result, RlcError};
use crate::math::{Samples, Scalar};

/// Generates `n` linearly spaced samples in [start, stop].
///
/// The last sample is pinned to `stop` so the interval is closed exactly.
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            let mut values: Vec<Scalar> = (0..n).map(|i| start + step * i as Scalar).collect();
            values[n - 1] = stop;
            values
        }
    }
}

/// Ordered, strictly increasing time samples over [start, stop] (seconds).
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Samples,
}

impl TimeGrid {
    /// Builds a grid of `count` evenly spaced samples over [start, stop].
    ///
    /// Requires `count >= 2`, finite bounds, `stop > start` and a spacing
    /// large enough that every sample is distinct in `f64`.
    pub fn new(start: Scalar, stop: Scalar, count: usize) -> Result<Self> {
        if count < 2 {
            return Err(RlcError::InvalidGrid(format!(
                "need at least 2 samples, got {count}"
            )));
        }
        if !start.is_finite() || !stop.is_finite() || stop <= start {
            return Err(RlcError::InvalidGrid(format!(
                "span [{start}, {stop}] is empty or not finite"
            )));
        }
        let times = linspace(start, stop, count);
        if let Some(i) = times.windows(2).position(|w| w[1] <= w[0]) {
            return Err(RlcError::InvalidGrid(format!(
                "span [{start}, {stop}] is too narrow for {count} distinct samples (repeat at index {})",
                i + 1
            )));
        }
        Ok(Self {
            times: DVector::from_vec(times),
        })
    }

    /// Builds a grid starting at t = 0 and covering `span_decay_times` decay times `tau`.
    pub fn over_decay_times(tau: Scalar, span_decay_times: Scalar, count: usize) -> Result<Self> {
        Self::new(0.0, span_decay_times * tau, count)
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false; a grid holds at least two samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// First sample (seconds).
    #[must_use]
    pub fn start(&self) -> Scalar {
        self.times[0]
    }

    /// Last sample (seconds).
    #[must_use]
    pub fn stop(&self) -> Scalar {
        self.times[self.times.len() - 1]
    }

    /// Spacing between consecutive samples (seconds).
    #[must_use]
    pub fn step(&self) -> Scalar {
        (self.stop() - self.start()) / (self.len() as Scalar - 1.0)
    }

    /// Sample times as a vector.
    #[must_use]
    pub fn times(&self) -> &Samples {
        &self.times
    }

    /// Sample times as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Scalar] {
        self.times.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    }

    #[test]
    fn grid_is_closed_and_strictly_increasing() {
        let grid = TimeGrid::over_decay_times(2.0, 5.0, 10_000).expect("valid grid");
        assert_eq!(grid.len(), 10_000);
        assert_eq!(grid.start(), 0.0);
        assert_eq!(grid.stop(), 10.0);
        assert!(grid.as_slice().windows(2).all(|w| w[1] > w[0]));
        assert_relative_eq!(grid.step(), 10.0 / 9_999.0, max_relative = 1.0e-12);
    }

    #[test]
    fn grid_rejects_bad_inputs() {
        assert!(matches!(TimeGrid::new(0.0, 1.0, 1), Err(RlcError::InvalidGrid(_))));
        assert!(matches!(TimeGrid::new(1.0, 1.0, 10), Err(RlcError::InvalidGrid(_))));
        assert!(matches!(
            TimeGrid::new(0.0, f64::NAN, 10),
            Err(RlcError::InvalidGrid(_))
        ));
    }

    #[test]
    fn grid_rejects_spans_below_float_resolution() {
        let err = TimeGrid::new(1.0, 1.0 + 4.0 * f64::EPSILON, 100).unwrap_err();
        assert!(matches!(err, RlcError::InvalidGrid(_)), "{err}");
        // A four-ulp span holds five distinct samples.
        let grid = TimeGrid::new(1.0, 1.0 + 4.0 * f64::EPSILON, 5).expect("one ulp per step");
        assert!(grid.as_slice().windows(2).all(|w| w[1] > w[0]));
    }
}
