//! Correlation engine.
//!
//! Two formulations of the same similarity measure:
//!
//! - [`direct`] is the zero-lag inner product.
//! - [`frequency_domain`] transforms both operands, multiplies one spectrum
//!   by the conjugate of the other and inverse-transforms the product,
//!   yielding the circular cross-correlation over all N lags.
//!
//! The two agree at lag 0 to floating-point tolerance; that consistency is
//! the engine's contract and is property-tested. [`windowed_full`] is the
//! direct linear (non-circular) correlation over every lag, kept around to
//! validate the transform path against zero-padded inputs.

use rustfft::{num_complex::Complex, FftPlanner};
use snafu::ensure;
use tracing::debug;

use crate::error::{EmptyInputSnafu, ShapeMismatchSnafu, SignalError};

fn check_operands(n1: usize, n2: usize) -> Result<(), SignalError> {
    ensure!(n1 == n2, ShapeMismatchSnafu { left: n1, right: n2 });
    ensure!(
        n1 > 0,
        EmptyInputSnafu {
            what: "correlation operands"
        }
    );
    Ok(())
}

/// Zero-lag inner product `sum x1[k] * conj(x2[k])`.
pub fn direct(x1: &[Complex<f64>], x2: &[Complex<f64>]) -> Result<Complex<f64>, SignalError> {
    check_operands(x1.len(), x2.len())?;
    Ok(x1
        .iter()
        .zip(x2)
        .fold(Complex::new(0.0, 0.0), |acc, (a, b)| acc + a * b.conj()))
}

/// [`direct`] for real-valued signals.
pub fn direct_real(x1: &[f64], x2: &[f64]) -> Result<f64, SignalError> {
    check_operands(x1.len(), x2.len())?;
    Ok(x1.iter().zip(x2).map(|(a, b)| a * b).sum())
}

/// Circular cross-correlation via the transform: `ifft(fft(x1) * conj(fft(x2)))`.
///
/// Output index `l` holds the correlation at lag `l` (wrapping at the
/// boundary). Index 0 equals [`direct`] up to floating-point error; for
/// `x1 == x2` it is the signal energy and, for real non-zero signals, the
/// maximum-magnitude sample of the whole output.
pub fn frequency_domain(
    x1: &[Complex<f64>],
    x2: &[Complex<f64>],
) -> Result<Vec<Complex<f64>>, SignalError> {
    check_operands(x1.len(), x2.len())?;
    let n = x1.len();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    let ifft = planner.plan_fft_inverse(n);

    let mut f1 = x1.to_vec();
    let mut f2 = x2.to_vec();
    fft.process(&mut f1);
    fft.process(&mut f2);

    for (a, b) in f1.iter_mut().zip(f2.iter()) {
        *a *= b.conj();
    }
    ifft.process(&mut f1);

    // rustfft leaves the inverse transform unnormalized
    let fac = 1.0 / n as f64;
    for v in f1.iter_mut() {
        *v *= fac;
    }
    debug!(lags = n, "circular correlation computed via transform");
    Ok(f1)
}

/// [`frequency_domain`] for real-valued signals.
pub fn frequency_domain_real(x1: &[f64], x2: &[f64]) -> Result<Vec<Complex<f64>>, SignalError> {
    let c1: Vec<Complex<f64>> = x1.iter().map(|&v| Complex::new(v, 0.0)).collect();
    let c2: Vec<Complex<f64>> = x2.iter().map(|&v| Complex::new(v, 0.0)).collect();
    frequency_domain(&c1, &c2)
}

/// Direct linear correlation over every lag from `-(N-1)` to `+(N-1)`.
///
/// Output has `2N - 1` samples with the zero-lag value at the center
/// (index `N - 1`). Quadratic in N; meant for validation, the transform
/// path is the production method.
pub fn windowed_full(
    x1: &[Complex<f64>],
    x2: &[Complex<f64>],
) -> Result<Vec<Complex<f64>>, SignalError> {
    check_operands(x1.len(), x2.len())?;
    let n = x1.len() as i64;
    let mut out = Vec::with_capacity((2 * n - 1) as usize);
    for lag in -(n - 1)..=(n - 1) {
        let mut acc = Complex::new(0.0, 0.0);
        for i in 0..n {
            let j = i - lag;
            if (0..n).contains(&j) {
                acc += x1[i as usize] * x2[j as usize].conj();
            }
        }
        out.push(acc);
    }
    Ok(out)
}

/// [`windowed_full`] for real-valued signals.
pub fn windowed_full_real(x1: &[f64], x2: &[f64]) -> Result<Vec<f64>, SignalError> {
    let c1: Vec<Complex<f64>> = x1.iter().map(|&v| Complex::new(v, 0.0)).collect();
    let c2: Vec<Complex<f64>> = x2.iter().map(|&v| Complex::new(v, 0.0)).collect();
    Ok(windowed_full(&c1, &c2)?.into_iter().map(|c| c.re).collect())
}
