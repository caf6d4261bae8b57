// src/logging.rs
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

use crate::config::Config;

const DEFAULT_LEVEL: &str = "warn";

/// Picks the log filter from the `-v` count, then the configured level,
/// then `warn`.
#[must_use]
pub fn level_directive(verbosity: u8, configured: Option<&str>) -> &str {
    match verbosity {
        0 => configured.unwrap_or(DEFAULT_LEVEL),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr subscriber. `RUST_LOG` wins over everything else.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(verbosity: u8, config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(level_directive(verbosity, config.log_level.as_deref()))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
