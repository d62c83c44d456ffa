//! Tracing setup with environment-based filtering.
//!
//! `RUST_LOG` controls output, e.g. `RUST_LOG=rustyprn=debug` or
//! `RUST_LOG=rustyprn::sequence=trace` for a single module.

#[cfg(test)]
use once_cell::sync::Lazy;

/// Initializes tracing for tests. Safe to call from every test; the
/// subscriber is installed once.
#[cfg(test)]
pub fn init_test_tracing() {
    static TRACING: Lazy<()> = Lazy::new(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rustyprn=warn"));

        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_line_number(true)
            .with_test_writer()
            .init();
    });

    Lazy::force(&TRACING);
}

/// Initializes tracing for binaries; call early in `main`.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rustyprn=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}
