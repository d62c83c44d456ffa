//! Uniform time axis and the axes derived from it.
//!
//! A [`TimeAxis`] is built once per analysis run and treated as immutable:
//! every signal produced against it has exactly `len()` samples. The two
//! derived axes mirror the spectrum and correlation plots:
//!
//! - [`TimeAxis::freq_axis`] lays out the FFT bin frequencies in transform
//!   order (non-negative bins first, then the negative half).
//! - [`TimeAxis::lag_axis`] reflects the axis about its origin so a full
//!   correlation function can be plotted over negative and positive lags.

use snafu::ensure;

use crate::error::{ShortAxisSnafu, SignalError};

/// An ordered, uniformly spaced sequence of sample instants.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    samples: Vec<f64>,
    step: f64,
}

impl TimeAxis {
    /// Builds an axis of `n` samples from `start` to `end` inclusive,
    /// so the step is `(end - start) / (n - 1)`.
    ///
    /// Fewer than two samples cannot define a step and is rejected.
    pub fn linspace(start: f64, end: f64, n: usize) -> Result<Self, SignalError> {
        ensure!(n >= 2, ShortAxisSnafu { count: n });
        let step = (end - start) / (n - 1) as f64;
        let samples = (0..n).map(|i| start + i as f64 * step).collect();
        Ok(Self { samples, step })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Sample spacing.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Covered time range, `(n - 1) * step`.
    pub fn range(&self) -> f64 {
        self.step * (self.samples.len() - 1) as f64
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Frequency axis matching an unshifted FFT of a signal on this axis.
    ///
    /// Bin spacing is `1 / range()`. The non-negative bins come first, the
    /// negative bins follow, for a total of `len()` values.
    pub fn freq_axis(&self) -> Vec<f64> {
        let n = self.samples.len();
        let df = 1.0 / self.range();
        let n_pos = n - n / 2;
        let mut f = Vec::with_capacity(n);
        for i in 0..n_pos {
            f.push(i as f64 * df);
        }
        let neg_start = -(0.5 * (n as f64 - 1.0) + 1.0) * df;
        for i in 0..n / 2 {
            f.push(neg_start + i as f64 * df);
        }
        f
    }

    /// Lag axis for a full correlation function: the time axis reflected
    /// about its minimum and concatenated with itself, `2 * len() - 1`
    /// values covering lags from `-(n-1)*step` to `+(n-1)*step`.
    pub fn lag_axis(&self) -> Vec<f64> {
        let n = self.samples.len();
        let t_min = self.samples[0];
        let t_max = self.samples[n - 1];
        let mut lags = Vec::with_capacity(2 * n - 1);
        for i in 0..(n - 1) {
            lags.push(2.0 * t_min - t_max + i as f64 * self.step);
        }
        lags.extend_from_slice(&self.samples);
        lags
    }
}
