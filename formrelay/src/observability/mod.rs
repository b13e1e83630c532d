//! Logging setup
//!
//! Structured `tracing` events are emitted throughout the crate; this module
//! installs the subscriber that formats them.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LogSettings};

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `settings.level`.
///
/// # Example
///
/// ```rust,no_run
/// use formrelay::config::LogSettings;
/// use formrelay::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init(&LogSettings::default())?;
/// tracing::info!("Application started");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if the filter cannot be parsed or a global subscriber is
/// already installed
pub fn init(settings: &LogSettings) -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    match settings.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()?,
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?,
    }

    Ok(())
}

