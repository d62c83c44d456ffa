//! Pulse shape evaluators.
//!
//! Pure functions over a sampled time axis; each returns one pulse sampled
//! at every instant of `t`, so the output always has `t.len()` samples.
//! These are the building blocks the pulse-train synthesizer superposes.

use core::f64::consts::PI;

/// Guard width for the removable singularity of the raised-cosine pulse.
const RCOS_EPS: f64 = 1e-8;

/// Rectangular pulse: 1 strictly inside `(t_start, t_end)`, 0 elsewhere.
///
/// The interval is open: a sample landing exactly on either edge reads 0,
/// which keeps adjacent pulses in a train from sharing an edge sample.
pub fn rect(t: &[f64], t_start: f64, t_end: f64) -> Vec<f64> {
    t.iter()
        .map(|&ti| {
            if ti > t_start && ti < t_end {
                1.0
            } else {
                0.0
            }
        })
        .collect()
}

/// Cardinal sine pulse centered at `t0` with main-lobe width `width`.
///
/// Evaluates the normalized sinc (sinc(0) = 1) of `pi * (t - t0) / width`.
pub fn sinc(t: &[f64], t0: f64, width: f64) -> Vec<f64> {
    t.iter()
        .map(|&ti| normalized_sinc(PI * (ti - t0) / width))
        .collect()
}

/// Raised-cosine pulse: the sinc of [`sinc`] damped by
/// `cos(pi*beta*tau) / (1 - (2*beta*tau)^2)` with `beta = alpha / width`.
///
/// `alpha` is the roll-off factor in [0, 1]. Where `|2*beta*tau| = 1` the
/// damping expression is 0/0; its limit there is `pi/4`, which is
/// substituted under a small-epsilon guard so no NaN or infinity reaches
/// downstream signals.
pub fn raised_cosine(t: &[f64], t0: f64, width: f64, alpha: f64) -> Vec<f64> {
    let beta = alpha / width;
    t.iter()
        .map(|&ti| {
            let tau = ti - t0;
            let denom = 1.0 - 4.0 * (beta * tau) * (beta * tau);
            let damp = if libm::fabs(denom) < RCOS_EPS {
                PI / 4.0
            } else {
                libm::cos(PI * beta * tau) / denom
            };
            normalized_sinc(PI * tau / width) * damp
        })
        .collect()
}

/// sin(pi x) / (pi x), with sinc(0) = 1.
fn normalized_sinc(x: f64) -> f64 {
    if libm::fabs(x) < 1e-12 {
        1.0
    } else {
        let px = PI * x;
        libm::sin(px) / px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_is_open_interval() {
        let t = [0.0, 0.1, 0.2, 0.3, 0.4];
        let p = rect(&t, 0.1, 0.3);
        assert_eq!(p, vec![0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn rect_output_matches_axis_length() {
        let t: Vec<f64> = (0..100).map(|i| i as f64 * 0.01).collect();
        assert_eq!(rect(&t, 0.2, 0.5).len(), t.len());
    }

    #[test]
    fn sinc_peaks_at_center() {
        let t = [0.3, 0.4, 0.5, 0.6, 0.7];
        let p = sinc(&t, 0.5, 0.2);
        assert!((p[2] - 1.0).abs() < 1e-12);
        assert!(p[0].abs() < 1.0);
        // symmetric about t0
        assert!((p[1] - p[3]).abs() < 1e-12);
        assert!((p[0] - p[4]).abs() < 1e-12);
    }

    #[test]
    fn raised_cosine_with_zero_rolloff_is_sinc() {
        let t: Vec<f64> = (0..50).map(|i| i as f64 * 0.02).collect();
        let rc = raised_cosine(&t, 0.5, 0.2, 0.0);
        let s = sinc(&t, 0.5, 0.2);
        for (a, b) in rc.iter().zip(s.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn raised_cosine_singular_point_is_finite() {
        // width 1, alpha 0.5 -> beta 0.5, singular at tau = 1 exactly
        let t = [1.0];
        let rc = raised_cosine(&t, 0.0, 1.0, 0.5);
        assert!(rc[0].is_finite());
        let expected = normalized_sinc(PI) * PI / 4.0;
        assert!((rc[0] - expected).abs() < 1e-9);
    }

    #[test]
    fn raised_cosine_near_singularity_is_continuous() {
        let width = 1.0;
        let alpha = 0.5;
        let at = |tau: f64| raised_cosine(&[tau], 0.0, width, alpha)[0];
        let exact = at(1.0);
        let near = at(1.0 + 1e-7);
        assert!((exact - near).abs() < 1e-4);
    }
}
