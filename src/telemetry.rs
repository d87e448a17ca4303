//! Telemetry helpers for applications embedding `textviz`.
//!
//! This module keeps tracing setup explicit and opt-in.
//! Consumers can either call one of the initializers here or wire their own
//! `tracing` subscriber and filters.

/// Initializes a default stderr `tracing` subscriber when the `telemetry`
/// feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(default_env_filter())
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Initializes tracing with a stderr layer plus a timestamped session log file
/// under `log_dir` (`session_<YYYYmmdd_HHMMSS>.log`).
///
/// Returns the session log path on success, `Ok(None)` when the feature is
/// disabled or a global subscriber already exists.
pub fn init_session_tracing(
    log_dir: &std::path::Path,
) -> crate::error::VizResult<Option<std::path::PathBuf>> {
    #[cfg(feature = "telemetry")]
    {
        use crate::error::VizError;
        use std::sync::Arc;
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        std::fs::create_dir_all(log_dir)
            .map_err(|err| VizError::resource(log_dir.display().to_string(), err.to_string()))?;
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let log_path = log_dir.join(format!("session_{stamp}.log"));
        let file = std::fs::File::create(&log_path)
            .map_err(|err| VizError::resource(log_path.display().to_string(), err.to_string()))?;

        let initialized = tracing_subscriber::registry()
            .with(default_env_filter())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .compact(),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            )
            .try_init()
            .is_ok();

        return Ok(initialized.then_some(log_path));
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = log_dir;
        Ok(None)
    }
}

#[cfg(feature = "telemetry")]
fn default_env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}
