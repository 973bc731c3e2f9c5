//! Structured logging setup.
//!
//! The parser only emits `tracing` events; whoever embeds it decides where
//! they go. This helper installs the standard stderr subscriber once at
//! process startup.

use crate::constants::DEFAULT_LOG_LEVEL;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a stderr subscriber filtered by `RUST_LOG`
///
/// Falls back to `variant_loader=<level>` when `RUST_LOG` is unset (or
/// `variant_loader=info` when `level` is `None`). Returns `false` if a
/// global subscriber was already installed.
pub fn init_logging(level: Option<&str>) -> bool {
    let log_level = level.unwrap_or(DEFAULT_LOG_LEVEL);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("variant_loader={}", log_level)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .is_ok();

    if installed {
        debug!("Logging initialized at level: {}", log_level);
    }

    installed
}
