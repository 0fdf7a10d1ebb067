//! Structured logging for the orrery viewer.
//!
//! Console output via the `tracing` ecosystem: timestamps relative to
//! startup, module targets, and `RUST_LOG`-style filtering. Debug builds
//! can additionally write JSON logs to a file for post-mortem analysis.

use std::path::Path;

use orrery_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter: everything at `info`, wgpu/naga quieted to `warn`.
const DEFAULT_FILTER: &str = "info,wgpu=warn,naga=warn";

/// Initialize the global tracing subscriber.
///
/// The filter is resolved in order: `RUST_LOG` env var, then the config's
/// `debug.log_level` override, then [`DEFAULT_FILTER`]. When `debug_build`
/// is set and `log_dir` is given, a JSON file layer is added as well.
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => DEFAULT_FILTER.to_string(),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join("orrery.log"))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }

    tracing::debug!(filter = %filter_str, "Logging initialized");
}

/// Create an `EnvFilter` with the default filter string.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
