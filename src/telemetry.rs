//! Opt-in tracing setup for hosts embedding `lifeline-rs`.
//!
//! Nothing here runs implicitly: the crate only emits `tracing` events, and
//! hosts either call [`init_default_tracing`] or install their own
//! subscriber and filters.

/// Filter used when `RUST_LOG` is unset: this crate's targets at debug
/// (clause skips, lane placements), everything else at info.
#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "info,lifeline_rs=debug";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is
/// enabled.
///
/// Returns `true` when the subscriber was installed. Returns `false` when
/// the feature is disabled or the host already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
