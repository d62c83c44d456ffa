//! Gold-code construction from a preferred pair of degree-10 m-sequences.
//!
//! Two maximal-length registers run in lockstep, both seeded all-ones. The
//! output chip combines a fixed tap of the first register with a
//! caller-selected pair of taps from the second, all mod 2. This is the
//! GPS C/A arrangement, where the tap pair selects the code of the family.

use snafu::ensure;
use tracing::debug;

use crate::error::{SignalError, TapOutOfRangeSnafu, ZeroLengthSequenceSnafu};

/// Degree of both component registers.
pub const GOLD_DEGREE: usize = 10;

/// Feedback taps of the first register (polynomial taps 3 and 10).
pub const G1_FEEDBACK: [u8; GOLD_DEGREE] = [0, 0, 1, 0, 0, 0, 0, 0, 0, 1];

/// Feedback taps of the second register (taps 2, 3, 6, 8, 9, 10).
pub const G2_FEEDBACK: [u8; GOLD_DEGREE] = [0, 1, 1, 0, 0, 1, 0, 1, 1, 1];

/// Generates `n_periods * n_bits` Gold chips.
///
/// `tap_a` and `tap_b` are 1-indexed cells of the second register whose
/// mod-2 sum is combined with the last cell of the first register. Both
/// registers are re-seeded all-ones at the start of every call, so equal
/// arguments always reproduce the same sequence.
pub fn gold_sequence(
    tap_a: usize,
    tap_b: usize,
    n_bits: usize,
    n_periods: usize,
) -> Result<Vec<u8>, SignalError> {
    ensure!(
        (1..=GOLD_DEGREE).contains(&tap_a),
        TapOutOfRangeSnafu {
            tap: tap_a,
            degree: GOLD_DEGREE,
        }
    );
    ensure!(
        (1..=GOLD_DEGREE).contains(&tap_b),
        TapOutOfRangeSnafu {
            tap: tap_b,
            degree: GOLD_DEGREE,
        }
    );
    ensure!(n_bits > 0 && n_periods > 0, ZeroLengthSequenceSnafu);

    let mut reg1 = [1u8; GOLD_DEGREE];
    let mut reg2 = [1u8; GOLD_DEGREE];
    let total = n_periods * n_bits;
    let mut out = Vec::with_capacity(total);

    for _ in 0..total {
        let g1 = reg1[GOLD_DEGREE - 1];
        let g2 = (reg2[tap_a - 1] + reg2[tap_b - 1]) & 1;
        out.push((g1 + g2) & 1);

        let in1 = feedback(&reg1, &G1_FEEDBACK);
        let in2 = feedback(&reg2, &G2_FEEDBACK);
        shift_in(&mut reg1, in1);
        shift_in(&mut reg2, in2);
    }

    debug!(tap_a, tap_b, chips = out.len(), "gold sequence generated");
    Ok(out)
}

/// Mod-2 sum of the tapped register cells.
fn feedback(reg: &[u8; GOLD_DEGREE], taps: &[u8; GOLD_DEGREE]) -> u8 {
    reg.iter()
        .zip(taps)
        .fold(0u8, |acc, (&r, &t)| acc ^ (r & t))
}

/// Shift toward higher indices, feedback enters at cell 0.
fn shift_in(reg: &mut [u8; GOLD_DEGREE], input: u8) {
    for i in (1..GOLD_DEGREE).rev() {
        reg[i] = reg[i - 1];
    }
    reg[0] = input;
}
