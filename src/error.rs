use snafu::Snafu;

/// Errors raised by the signal-processing core.
///
/// Everything here is a malformed-input rejection: there is no I/O and no
/// retryable condition anywhere in the core. The one numerical hazard the
/// core handles itself is the removable singularity of the raised-cosine
/// pulse, which resolves to its limiting value instead of an error.
#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum SignalError {
    /// Two signals that must share a sampling axis do not.
    #[snafu(display("length mismatch: {left} vs {right} samples"))]
    ShapeMismatch { left: usize, right: usize },

    #[snafu(display("{what} is empty"))]
    EmptyInput { what: &'static str },

    #[snafu(display("feedback vector has {count} taps connected, need at least 2"))]
    TooFewTaps { count: usize },

    #[snafu(display("time axis needs at least two samples, got {count}"))]
    ShortAxis { count: usize },

    #[snafu(display("register tap {tap} outside 1..={degree}"))]
    TapOutOfRange { tap: usize, degree: usize },

    #[snafu(display("requested a sequence of zero bits"))]
    ZeroLengthSequence,

    #[snafu(display(
        "state vector has {state} cells but the transition matrix is {degree}x{degree}"
    ))]
    StateSizeMismatch { state: usize, degree: usize },
}
