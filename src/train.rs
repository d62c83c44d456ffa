//! Pulse-train synthesis: expands a chip sequence into a sampled signal.
//!
//! One pulse is placed per symbol at a fixed spacing and scaled by the
//! symbol amplitude. Overlapping contributions combine by pointwise
//! maximum, not summation: chips of a non-overlapping train may share
//! samples at their edges, and a sum would double the amplitude there.

use snafu::ensure;
use tracing::debug;

use crate::error::{EmptyInputSnafu, SignalError};
use crate::pulse;

/// Pulse shape selection for a synthesized train.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PulseShape {
    /// Rectangular window spanning one symbol period.
    Rect,
    /// Cardinal sine with the given main-lobe width.
    Sinc { width: f64 },
    /// Raised cosine with the given main-lobe width and roll-off factor.
    RaisedCosine { width: f64, alpha: f64 },
}

/// Synthesizes a pulse train over the time axis `t`.
///
/// Symbol `i` anchors at `delay + i * (symbol_period + guard_interval)`:
/// the leading edge for rectangular pulses, the pulse center for sinc and
/// raised-cosine. Each pulse is scaled by the symbol amplitude (0/1 chips
/// or bipolar, caller's convention). The output always has `t.len()`
/// samples.
pub fn synthesize(
    t: &[f64],
    shape: PulseShape,
    symbol_period: f64,
    guard_interval: f64,
    delay: f64,
    symbols: &[f64],
) -> Result<Vec<f64>, SignalError> {
    ensure!(!t.is_empty(), EmptyInputSnafu { what: "time axis" });
    ensure!(
        !symbols.is_empty(),
        EmptyInputSnafu {
            what: "symbol sequence"
        }
    );

    let spacing = symbol_period + guard_interval;
    let mut x = vec![0.0f64; t.len()];
    for (i, &amplitude) in symbols.iter().enumerate() {
        let anchor = delay + i as f64 * spacing;
        let p = match shape {
            PulseShape::Rect => pulse::rect(t, anchor, anchor + symbol_period),
            PulseShape::Sinc { width } => pulse::sinc(t, anchor, width),
            PulseShape::RaisedCosine { width, alpha } => {
                pulse::raised_cosine(t, anchor, width, alpha)
            }
        };
        for (xi, &pi) in x.iter_mut().zip(p.iter()) {
            *xi = xi.max(pi * amplitude);
        }
    }
    debug!(
        symbols = symbols.len(),
        samples = x.len(),
        "pulse train synthesized"
    );
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_train_places_pulses_at_symbol_slots() {
        // 11 samples over 0..1, symbol period 0.2, chips [1,0,1]:
        // energy only inside (0,0.2) and (0.4,0.6)
        let t: Vec<f64> = (0..11).map(|i| i as f64 * 0.1).collect();
        let x = synthesize(&t, PulseShape::Rect, 0.2, 0.0, 0.0, &[1.0, 0.0, 1.0]).unwrap();
        assert_eq!(x.len(), 11);
        for (i, &v) in x.iter().enumerate() {
            let ti = t[i];
            let inside = (ti > 0.0 && ti < 0.2) || (ti > 0.4 && ti < 0.6);
            if inside {
                assert!((v - 1.0).abs() < 1e-12, "expected pulse at t = {ti}");
            } else {
                assert_eq!(v, 0.0, "expected silence at t = {ti}");
            }
        }
    }

    #[test]
    fn output_length_tracks_axis_not_symbols() {
        let t: Vec<f64> = (0..57).map(|i| i as f64 * 0.01).collect();
        for n_symbols in [1, 3, 20, 200] {
            let symbols = vec![1.0; n_symbols];
            let x = synthesize(&t, PulseShape::Rect, 0.05, 0.01, 0.0, &symbols).unwrap();
            assert_eq!(x.len(), t.len());
        }
    }

    #[test]
    fn edge_samples_do_not_double_up() {
        // adjacent chips share the sample at t = 0.2; max keeps it at the
        // single-pulse level
        let t: Vec<f64> = (0..21).map(|i| i as f64 * 0.05).collect();
        let x = synthesize(&t, PulseShape::Rect, 0.2, 0.0, 0.0, &[1.0, 1.0]).unwrap();
        assert!(x.iter().all(|&v| v <= 1.0));
    }

    #[test]
    fn delay_shifts_the_train() {
        let t: Vec<f64> = (0..11).map(|i| i as f64 * 0.1).collect();
        let x = synthesize(&t, PulseShape::Rect, 0.2, 0.0, 0.4, &[1.0]).unwrap();
        assert_eq!(x[5], 1.0); // t = 0.5 inside (0.4, 0.6)
        assert_eq!(x[3], 0.0);
    }

    #[test]
    fn sinc_train_peaks_at_anchors() {
        let t: Vec<f64> = (0..101).map(|i| i as f64 * 0.01).collect();
        let x = synthesize(
            &t,
            PulseShape::Sinc { width: 0.2 },
            0.2,
            0.0,
            0.2,
            &[1.0, 1.0],
        )
        .unwrap();
        assert!((x[20] - 1.0).abs() < 1e-9); // t = 0.2
        assert!((x[40] - 1.0).abs() < 1e-9); // t = 0.4
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let t: Vec<f64> = (0..11).map(|i| i as f64 * 0.1).collect();
        assert_eq!(
            synthesize(&[], PulseShape::Rect, 0.2, 0.0, 0.0, &[1.0]),
            Err(SignalError::EmptyInput { what: "time axis" })
        );
        assert_eq!(
            synthesize(&t, PulseShape::Rect, 0.2, 0.0, 0.0, &[]),
            Err(SignalError::EmptyInput {
                what: "symbol sequence"
            })
        );
    }
}
