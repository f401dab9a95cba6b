//! ArbitraX Strategy Engine
//!
//! Entry point. Loads `.env` if present, initialises structured logging
//! on stderr, prints the startup banner on stdout and exits.

use std::io;
use tracing::warn;

use strategy_engine::bootstrap;
use strategy_engine::config::{self, EngineConfig, LogFormat};
use strategy_engine::env_file;

fn main() {
    // Load .env file if present (non-fatal if missing or malformed)
    let env_status = env_file::load();

    let (cfg, cfg_error) = match EngineConfig::from_env() {
        Ok(cfg) => (cfg, None),
        Err(e) => (EngineConfig::default(), Some(e)),
    };

    init_logging(&cfg);

    // Logging was not up while the env file was read; report it now.
    env_file::report(&env_status);
    if let Some(e) = cfg_error {
        warn!(error = format!("{e:#}"), "Invalid engine configuration, using defaults");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = bootstrap::run(&mut out) {
        warn!(error = %e, "Failed to write startup banner");
    }
}

/// Initialise the `tracing` subscriber. Logs go to stderr; stdout is
/// reserved for the banner.
fn init_logging(cfg: &EngineConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    match cfg.log_format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(io::stderr)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(io::stderr)
                .with_target(true)
                .init();
        }
    }
}
