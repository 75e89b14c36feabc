//! Log subscriber setup

use crate::config::{LogFormat, LoggingConfig};
use crate::error::Result;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber built from `config`.
///
/// `RUST_LOG` overrides the configured level. Returns `Ok(false)` when a
/// global subscriber was already installed, leaving it in place.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let format = config.log_format()?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match (&config.file, format) {
        (Some(path), format) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let builder = builder.with_ansi(false).with_writer(Mutex::new(file));
            match format {
                LogFormat::Json => builder.json().try_init().is_ok(),
                LogFormat::Pretty => builder.try_init().is_ok(),
            }
        }
        (None, LogFormat::Json) => builder.json().try_init().is_ok(),
        (None, LogFormat::Pretty) => builder.try_init().is_ok(),
    };

    if installed {
        tracing::debug!(level = %config.level, format = %config.format, "logging initialized");
    }
    Ok(installed)
}
