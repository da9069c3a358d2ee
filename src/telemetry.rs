//! Optional tracing bootstrap for embeddings that have no subscriber of
//! their own.
//!
//! The reshaper and runtime emit structured `tracing` events either way;
//! nothing here is required for them. Hosts that already install a
//! subscriber (most analytics shells do) should skip this module
//! entirely.

/// Installs a compact fmt subscriber honoring `RUST_LOG`, defaulting to
/// `info`, when built with the `telemetry` feature.
///
/// Returns `true` when the subscriber was installed by this call. Returns
/// `false` when the feature is disabled or a global subscriber already
/// exists, in which case the plugin keeps logging into whatever the host
/// set up.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
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
