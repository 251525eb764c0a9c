//! Shared numerical primitives anchored on `nalgebra` and `num_complex`.

use nalgebra::DVector;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for phasors and characteristic roots.
pub type CScalar = num_complex::Complex<Scalar>;
/// Sampled real signal, one entry per time sample.
pub type Samples = DVector<Scalar>;

/// Returns the complex exponential `e^(s * t)` for a complex frequency `s`.
#[must_use]
pub fn complex_exp(s: CScalar, t: Scalar) -> CScalar {
    (s * t).exp()
}

/// Largest absolute value in `values`, or `0.0` for an empty slice.
#[must_use]
pub fn peak_magnitude(values: &[Scalar]) -> Scalar {
    values.iter().fold(0.0, |acc, v| acc.max(v.abs()))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn complex_exp_of_pure_imaginary_is_unit_phasor() {
        let z = complex_exp(CScalar::new(0.0, 2.0), 0.25);
        assert_relative_eq!(z.norm(), 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(z.arg(), 0.5, epsilon = 1.0e-12);
    }

    #[test]
    fn peak_magnitude_ignores_sign() {
        assert_relative_eq!(peak_magnitude(&[1.0, -3.5, 2.0]), 3.5);
        assert_relative_eq!(peak_magnitude(&[]), 0.0);
    }
}
