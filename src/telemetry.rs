//! Opt-in log output for the chart engine.
//!
//! Renderers only emit `tracing` events (degenerate data, skipped axes,
//! unreadable rows). Nothing is printed until a subscriber exists: call
//! `init_default_tracing` or install one in the host application.

/// Filter used when `RUST_LOG` is unset or unparsable.
#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "warn";

/// Sends engine diagnostics to stderr, filtered by `RUST_LOG`.
///
/// Without the `telemetry` feature this does nothing and returns `false`.
/// It also returns `false` when the process already has a global
/// subscriber, which is left in place.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
