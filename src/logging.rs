//! Logging initialization and configuration.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor a configured level is present.
pub const DEFAULT_FILTER: &str = "padel_sessions=info,tower_http=info";

/// Try to initialize the logging system with an explicit filter.
///
/// A bare level such as `debug` applies to this crate and the HTTP trace
/// layer; anything else is parsed as a full directive string.
pub fn init_with_filter(level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = filter_for(level);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .try_init()
}

/// Try to initialize the logging system.
///
/// Returns `Ok(())` if successful, or `Err` if logging has already been
/// initialized.
pub fn try_init() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .try_init()
}

fn filter_for(level: &str) -> EnvFilter {
    match level.trim() {
        "" => EnvFilter::new(DEFAULT_FILTER),
        lvl @ ("error" | "warn" | "info" | "debug" | "trace") => {
            EnvFilter::new(format!("padel_sessions={lvl},tower_http={lvl}"))
        }
        directives => {
            EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_init_idempotent() {
        let _ = try_init();
        // Second call fails because a subscriber is already set
        let _ = try_init();
    }

    #[test]
    fn test_init_with_filter_does_not_panic() {
        let _ = init_with_filter("debug");
        tracing::debug!("test debug message");
        tracing::info!("test info message");
    }

    #[test]
    fn test_filter_for_bare_level() {
        let filter = filter_for("debug");
        assert!(filter.to_string().contains("padel_sessions=debug"));
    }

    #[test]
    fn test_filter_for_directives() {
        let filter = filter_for("padel_sessions=trace,axum=warn");
        let rendered = filter.to_string();
        assert!(rendered.contains("padel_sessions=trace"));
        assert!(rendered.contains("axum=warn"));
    }

    #[test]
    fn test_filter_for_blank_falls_back() {
        let filter = filter_for("  ");
        assert!(filter.to_string().contains("padel_sessions=info"));
    }
}
