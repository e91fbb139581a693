use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging.
///
/// Diagnostics go to stderr so the stdout of the tools we shell out to
/// stays clean. RUST_LOG takes precedence over the configured default
/// level.
pub fn init_telemetry(default_level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();

    tracing::debug!("Chores telemetry initialized");
    Ok(())
}

/// Shutdown telemetry gracefully
pub fn shutdown_telemetry() {
    // Plain fmt logging needs no explicit flush
    tracing::debug!("Chores telemetry shutdown complete");
}
