//! Tracing subscriber setup

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Directive used when `RUST_LOG` is not set
#[must_use]
pub fn default_directive(config: &LoggingConfig) -> String {
    format!(
        "skyglance={level},tower_http={level}",
        level = config.level
    )
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(config)))
        .with_context(|| format!("Invalid log level '{}'", config.level))?;

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(fmt::layer().json())
            .try_init()
            .context("Failed to install tracing subscriber")?;
    } else {
        registry
            .with(fmt::layer())
            .try_init()
            .context("Failed to install tracing subscriber")?;
    }

    Ok(())
}
