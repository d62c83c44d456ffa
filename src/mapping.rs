//! Constellation mapping: chip sequences to complex baseband signals.
//!
//! A mapper expands a binary sequence into a pulse train per branch, then
//! bipolar-maps the result (0/1 -> -1/+1). BPSK drives the in-phase branch
//! only; QPSK splits even-position chips to I and odd-position chips to Q.

use rustfft::num_complex::Complex;

use crate::error::SignalError;
use crate::train::{self, PulseShape};

/// Pulse shape selection for a mapper, resolved against the chip rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rect,
    Sinc,
    RaisedCosine,
}

/// Optional timing and shaping parameters of a mapper.
///
/// Unset fields fall back to defaults derived from the chip rate:
/// symbol period and pulse width default to `1 / rate`, delay and guard
/// interval to 0, roll-off to 0.8.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappingOptions {
    /// Symbol period; `1 / rate` when `None`.
    pub symbol_period: Option<f64>,
    /// Delay between the axis origin and the first pulse.
    pub delay: f64,
    /// Space between consecutive pulses.
    pub guard_interval: f64,
    /// Main-lobe width of sinc / raised-cosine pulses; `1 / rate` when `None`.
    pub pulse_width: Option<f64>,
    /// Raised-cosine roll-off factor.
    pub rolloff: f64,
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self {
            symbol_period: None,
            delay: 0.0,
            guard_interval: 0.0,
            pulse_width: None,
            rolloff: 0.8,
        }
    }
}

impl MappingOptions {
    fn symbol_period(&self, rate: f64) -> f64 {
        self.symbol_period.unwrap_or(1.0 / rate)
    }

    fn shape(&self, kind: ShapeKind, rate: f64) -> PulseShape {
        let width = self.pulse_width.unwrap_or(1.0 / rate);
        match kind {
            ShapeKind::Rect => PulseShape::Rect,
            ShapeKind::Sinc => PulseShape::Sinc { width },
            ShapeKind::RaisedCosine => PulseShape::RaisedCosine {
                width,
                alpha: self.rolloff,
            },
        }
    }
}

/// BPSK baseband: bipolar pulse train on I, zero Q.
pub fn bpsk_baseband(
    t: &[f64],
    data: &[u8],
    rate: f64,
    kind: ShapeKind,
    opts: &MappingOptions,
) -> Result<Vec<Complex<f64>>, SignalError> {
    let chips: Vec<f64> = data.iter().map(|&b| (b & 1) as f64).collect();
    let i_bb = bipolar_train(t, opts, kind, rate, &chips)?;
    Ok(i_bb.into_iter().map(|i| Complex::new(i, 0.0)).collect())
}

/// QPSK baseband: even-position chips on I, odd-position chips on Q.
///
/// An odd-length sequence is zero-padded by one chip so both branches carry
/// the same number of symbols.
pub fn qpsk_baseband(
    t: &[f64],
    data: &[u8],
    rate: f64,
    kind: ShapeKind,
    opts: &MappingOptions,
) -> Result<Vec<Complex<f64>>, SignalError> {
    let mut bits: Vec<u8> = data.iter().map(|&b| b & 1).collect();
    if bits.len() % 2 != 0 {
        bits.push(0);
    }
    let i_chips: Vec<f64> = bits.iter().step_by(2).map(|&b| b as f64).collect();
    let q_chips: Vec<f64> = bits.iter().skip(1).step_by(2).map(|&b| b as f64).collect();
    let i_bb = bipolar_train(t, opts, kind, rate, &i_chips)?;
    let q_bb = bipolar_train(t, opts, kind, rate, &q_chips)?;
    Ok(i_bb
        .into_iter()
        .zip(q_bb)
        .map(|(i, q)| Complex::new(i, q))
        .collect())
}

fn bipolar_train(
    t: &[f64],
    opts: &MappingOptions,
    kind: ShapeKind,
    rate: f64,
    chips: &[f64],
) -> Result<Vec<f64>, SignalError> {
    let x = train::synthesize(
        t,
        opts.shape(kind, rate),
        opts.symbol_period(rate),
        opts.guard_interval,
        opts.delay,
        chips,
    )?;
    Ok(x.iter().map(|&v| 2.0 * v - 1.0).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(n: usize, step: f64) -> Vec<f64> {
        (0..n).map(|i| i as f64 * step).collect()
    }

    #[test]
    fn bpsk_is_bipolar_on_i_only() {
        let t = axis(40, 0.025);
        let bb = bpsk_baseband(&t, &[1, 0, 1, 1], 4.0, ShapeKind::Rect, &Default::default())
            .unwrap();
        assert_eq!(bb.len(), t.len());
        for s in &bb {
            assert!(s.re == 1.0 || s.re == -1.0);
            assert_eq!(s.im, 0.0);
        }
        // first chip slot (0, 0.25) carries a mark
        assert_eq!(bb[4].re, 1.0); // t = 0.1
        // second chip slot (0.25, 0.5) a space
        assert_eq!(bb[12].re, -1.0); // t = 0.3
    }

    #[test]
    fn qpsk_splits_even_and_odd_chips() {
        let t = axis(40, 0.025);
        // chips [1,0, 0,1]: I stream [1,0], Q stream [0,1]
        let bb = qpsk_baseband(&t, &[1, 0, 0, 1], 2.0, ShapeKind::Rect, &Default::default())
            .unwrap();
        assert_eq!(bb.len(), t.len());
        assert_eq!(bb[4].re, 1.0); // t = 0.1, I chip 1
        assert_eq!(bb[4].im, -1.0); // Q chip 0
        assert_eq!(bb[28].re, -1.0); // t = 0.7, I chip 0
        assert_eq!(bb[28].im, 1.0); // Q chip 1
    }

    #[test]
    fn qpsk_pads_odd_sequences() {
        let t = axis(30, 0.1);
        let bb = qpsk_baseband(&t, &[1, 1, 1], 1.0, ShapeKind::Rect, &Default::default());
        assert!(bb.is_ok());
    }

    #[test]
    fn options_override_defaults() {
        let t = axis(100, 0.01);
        let opts = MappingOptions {
            delay: 0.3,
            ..Default::default()
        };
        let bb = bpsk_baseband(&t, &[1], 10.0, ShapeKind::Rect, &opts).unwrap();
        // pulse occupies (0.3, 0.4) after the delay
        assert_eq!(bb[20].re, -1.0);
        assert_eq!(bb[35].re, 1.0);
    }

    #[test]
    fn default_rolloff_matches_documented_value() {
        let opts = MappingOptions::default();
        assert_eq!(opts.rolloff, 0.8);
        assert_eq!(opts.delay, 0.0);
        assert_eq!(opts.guard_interval, 0.0);
        assert!(opts.symbol_period.is_none());
        assert!(opts.pulse_width.is_none());
    }
}
