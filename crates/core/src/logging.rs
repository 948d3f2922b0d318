//! `tracing` subscriber setup for services embedding the stores.

use std::{
    fs::{self, File, OpenOptions},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::AppConfig;

/// File written inside `AppConfig::log_dir`.
pub const LOG_FILE_NAME: &str = "shipping.log";

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured filter. Fails if a global subscriber
/// is already set.
pub fn init(config: &AppConfig) -> Result<()> {
    let env_filter = build_filter(config)?;

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stdout);

    let file_layer = match &config.log_dir {
        Some(dir) => {
            let file = open_log_file(dir)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .compact()
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")
}

fn build_filter(config: &AppConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .with_context(|| format!("invalid log filter '{}'", config.log_filter)),
    }
}

fn open_log_file(dir: &Path) -> Result<File> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
