//! Tracing subscriber setup

use crate::config::LoggingConfig;
use crate::utils::error::{AuthzError, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber described by `config`.
///
/// `RUST_LOG` overrides the configured level. Output goes to stderr so that
/// command output on stdout stays machine-readable. Calling this again after a
/// subscriber is installed is a no-op.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(&config.level, rust_log.as_deref())?;

    let installed = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .try_init()
    };

    if let Err(e) = installed {
        debug!("Logging already initialized: {}", e);
    }
    Ok(())
}

/// Filter from `RUST_LOG` when it is set and non-empty, else from `level`
fn build_filter(level: &str, rust_log: Option<&str>) -> Result<EnvFilter> {
    let directives = match rust_log {
        Some(value) if !value.trim().is_empty() => value,
        _ => level,
    };
    EnvFilter::try_new(directives)
        .map_err(|e| AuthzError::Config(format!("Invalid log filter '{}': {}", directives, e)))
}
