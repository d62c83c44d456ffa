//! Simple shift register generator (SSRG) over GF(2).
//!
//! A chip sequence is produced by a linear recurrence: the register shifts
//! down one cell per step and the feedback sum of the tapped cells is
//! injected at the top. The recurrence is expressed as an L x L binary
//! [`TransitionMatrix`] so that an n-step advance can be computed two ways:
//!
//! - [`step`] applied n times, or
//! - [`advance_by_power`], which raises the matrix to the n-th power mod 2
//!   and applies it once.
//!
//! The two formulations agree for every n >= 0; that equivalence is the
//! correctness contract of the generator and is property-tested.
//!
//! An all-zero register is a fixed point of any linear recurrence: seeded
//! with zeros the generator emits zeros forever. The generator does not
//! reject such a seed (it is a valid state of the linear map), it only logs
//! a warning so the caller can reseed.

pub mod gold;

use snafu::ensure;
use tracing::{debug, warn};

use crate::error::{
    SignalError, StateSizeMismatchSnafu, TooFewTapsSnafu, ZeroLengthSequenceSnafu,
};

/// L x L binary matrix describing one register step, arithmetic mod 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionMatrix {
    degree: usize,
    rows: Vec<Vec<u8>>,
}

impl TransitionMatrix {
    /// Register degree L.
    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    fn identity(degree: usize) -> Self {
        let mut rows = vec![vec![0u8; degree]; degree];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 1;
        }
        Self { degree, rows }
    }

    /// Matrix product mod 2.
    fn multiply(&self, other: &TransitionMatrix) -> TransitionMatrix {
        let l = self.degree;
        let mut rows = vec![vec![0u8; l]; l];
        for i in 0..l {
            for k in 0..l {
                if self.rows[i][k] == 1 {
                    for j in 0..l {
                        rows[i][j] ^= other.rows[k][j];
                    }
                }
            }
        }
        TransitionMatrix { degree: l, rows }
    }

    /// Matrix-vector product mod 2.
    fn apply(&self, state: &[u8]) -> Vec<u8> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(state)
                    .fold(0u8, |acc, (&m, &s)| acc ^ (m & s & 1))
            })
            .collect()
    }

    /// Matrix power mod 2 by repeated squaring.
    fn pow(&self, mut n: u64) -> TransitionMatrix {
        let mut result = TransitionMatrix::identity(self.degree);
        let mut base = self.clone();
        while n > 0 {
            if n & 1 == 1 {
                result = result.multiply(&base);
            }
            base = base.multiply(&base);
            n >>= 1;
        }
        result
    }
}

/// Builds the transition matrix for a feedback tap vector of length L.
///
/// The first row is the tap vector itself (the feedback sum feeding cell 0)
/// and the remaining rows are a shifted identity (cell i copies cell i-1).
/// A recurrence with fewer than two connected taps cannot produce a useful
/// sequence and is rejected.
pub fn build_transition(feedback: &[u8]) -> Result<TransitionMatrix, SignalError> {
    let taps = feedback.iter().filter(|&&b| b & 1 == 1).count();
    ensure!(taps >= 2, TooFewTapsSnafu { count: taps });
    let degree = feedback.len();
    let mut rows = Vec::with_capacity(degree);
    rows.push(feedback.iter().map(|&b| b & 1).collect());
    for i in 1..degree {
        let mut row = vec![0u8; degree];
        row[i - 1] = 1;
        rows.push(row);
    }
    Ok(TransitionMatrix { degree, rows })
}

/// One register step: `(m * state) mod 2`. Pure, the input state is untouched.
pub fn step(state: &[u8], m: &TransitionMatrix) -> Result<Vec<u8>, SignalError> {
    ensure!(
        state.len() == m.degree,
        StateSizeMismatchSnafu {
            state: state.len(),
            degree: m.degree,
        }
    );
    Ok(m.apply(state))
}

/// n-step advance in closed form: `(m^n mod 2) * state0`.
///
/// Identical to applying [`step`] n times from `state0`; `n = 0` returns the
/// initial state unchanged.
pub fn advance_by_power(
    state0: &[u8],
    m: &TransitionMatrix,
    n: u64,
) -> Result<Vec<u8>, SignalError> {
    ensure!(
        state0.len() == m.degree,
        StateSizeMismatchSnafu {
            state: state0.len(),
            degree: m.degree,
        }
    );
    if n == 0 {
        return Ok(state0.iter().map(|&b| b & 1).collect());
    }
    Ok(m.pow(n).apply(state0))
}

/// Generates `length` chips by iterating [`step`] `length - 1` times,
/// recording the last register cell at each state (the value derived from
/// `init` included).
pub fn generate(init: &[u8], m: &TransitionMatrix, length: usize) -> Result<Vec<u8>, SignalError> {
    ensure!(length > 0, ZeroLengthSequenceSnafu);
    ensure!(
        init.len() == m.degree,
        StateSizeMismatchSnafu {
            state: init.len(),
            degree: m.degree,
        }
    );
    let mut state: Vec<u8> = init.iter().map(|&b| b & 1).collect();
    if state.iter().all(|&b| b == 0) {
        warn!("all-zero register seed: the generator sits in its zero fixed point");
    }
    let mut out = Vec::with_capacity(length);
    out.push(state[m.degree - 1]);
    for _ in 1..length {
        state = m.apply(&state);
        out.push(state[m.degree - 1]);
    }
    debug!(chips = out.len(), degree = m.degree, "sequence generated");
    Ok(out)
}
