//! Quadrature up-conversion of complex baseband to real passband.

use rustfft::num_complex::Complex;
use snafu::ensure;

use crate::error::{EmptyInputSnafu, ShapeMismatchSnafu, SignalError};

/// Mixes a complex baseband signal onto a carrier:
///
/// `x(t) = Re(bb) * cos(2*pi*f0*t + p0) + Im(bb) * sin(2*pi*f0*t + p0 + pE)`
///
/// `phase0` is a fixed local-oscillator phase offset; `phase_error` models
/// the quadrature imbalance between the I and Q carrier branches (0 means
/// an ideal 90-degree split).
///
/// `jitter` is the sampling jitter as a percentage of the sample period.
/// It is accepted for interface compatibility but not applied; the time
/// axis is used unperturbed.
pub fn up_convert(
    baseband: &[Complex<f64>],
    t: &[f64],
    carrier_freq: f64,
    phase0: f64,
    phase_error: f64,
    _jitter: f64,
) -> Result<Vec<f64>, SignalError> {
    ensure!(!t.is_empty(), EmptyInputSnafu { what: "time axis" });
    ensure!(
        baseband.len() == t.len(),
        ShapeMismatchSnafu {
            left: baseband.len(),
            right: t.len(),
        }
    );

    use std::f64::consts::PI;
    Ok(baseband
        .iter()
        .zip(t)
        .map(|(bb, &ti)| {
            let arg = 2.0 * PI * carrier_freq * ti + phase0;
            bb.re * arg.cos() + bb.im * (arg + phase_error).sin()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn axis(n: usize, step: f64) -> Vec<f64> {
        (0..n).map(|i| i as f64 * step).collect()
    }

    #[test]
    fn unit_baseband_yields_pure_carrier() {
        // bb = 1 + 0i, no phase offset, no imbalance: exactly cos(2*pi*f0*t)
        let t = axis(100, 0.001);
        let bb = vec![Complex::new(1.0, 0.0); t.len()];
        let x = up_convert(&bb, &t, 50.0, 0.0, 0.0, 0.0).unwrap();
        for (xi, &ti) in x.iter().zip(&t) {
            let expected = (2.0 * PI * 50.0 * ti).cos();
            assert!((xi - expected).abs() < 1e-12, "at t = {ti}");
        }
    }

    #[test]
    fn quadrature_baseband_yields_sine_branch() {
        let t = axis(100, 0.001);
        let bb = vec![Complex::new(0.0, 1.0); t.len()];
        let x = up_convert(&bb, &t, 50.0, 0.0, 0.0, 0.0).unwrap();
        for (xi, &ti) in x.iter().zip(&t) {
            let expected = (2.0 * PI * 50.0 * ti).sin();
            assert!((xi - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn phase_offset_shifts_both_branches() {
        let t = axis(64, 0.001);
        let bb = vec![Complex::new(1.0, 0.0); t.len()];
        let p0 = PI / 3.0;
        let x = up_convert(&bb, &t, 25.0, p0, 0.0, 0.0).unwrap();
        for (xi, &ti) in x.iter().zip(&t) {
            assert!((xi - (2.0 * PI * 25.0 * ti + p0).cos()).abs() < 1e-12);
        }
    }

    #[test]
    fn phase_error_only_touches_the_q_branch() {
        let t = axis(64, 0.001);
        let bb_i = vec![Complex::new(1.0, 0.0); t.len()];
        let with = up_convert(&bb_i, &t, 25.0, 0.0, 0.1, 0.0).unwrap();
        let without = up_convert(&bb_i, &t, 25.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn jitter_parameter_is_inert() {
        let t = axis(64, 0.001);
        let bb = vec![Complex::new(0.5, -0.5); t.len()];
        let a = up_convert(&bb, &t, 40.0, 0.2, 0.05, 0.0).unwrap();
        let b = up_convert(&bb, &t, 40.0, 0.2, 0.05, 25.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let t = axis(10, 0.1);
        let bb = vec![Complex::new(1.0, 0.0); 9];
        assert_eq!(
            up_convert(&bb, &t, 1.0, 0.0, 0.0, 0.0),
            Err(SignalError::ShapeMismatch { left: 9, right: 10 })
        );
    }
}
