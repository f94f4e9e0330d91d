//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber that turns `tracing` macros throughout
//! the crate into formatted diagnostic output on stderr.

use crate::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the tracing subscriber with stderr output.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters spans and events based on the configured trace level
/// 2. Formats them with timestamps and span context
/// 3. Writes to stderr, keeping stdout free for the rendered UI
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `RUST_LOG` environment variable (highest priority)
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times (only the first call takes
/// effect). Failure to install the subscriber is ignored since
/// observability is optional.
///
/// # Example
///
/// ```rust
/// use hostelfinder::observability::init_tracing;
/// use hostelfinder::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
