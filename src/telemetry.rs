//! Tracing setup helpers for hosts embedding `deck-rs`.
//!
//! Nothing here installs itself implicitly. Hosts either call
//! `init_default_tracing` once at startup or wire their own `tracing`
//! subscriber and filters.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when this call installed the subscriber.
/// Returns `false` when the feature is disabled or when a global subscriber
/// was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("deck_rs=debug,info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
