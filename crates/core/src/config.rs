//! Application configuration.
//!
//! Values are layered: built-in defaults, then the TOML file, then
//! `SHIPPING_*` environment variables (e.g. `SHIPPING_LOG_FILTER=debug`).

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file location relative to the user's config directory.
pub const DEFAULT_CONFIG_FILE: &str = "shipping/config.toml";

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "SHIPPING";

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Shipping store configuration.

# Seed the location and voyage stores with the built-in sample set
# when no reference data file is configured.
seed_sample_data = true

# JSON file with `locations` and `voyages` arrays.
# reference_data = "/path/to/reference.json"

# Default tracing filter; RUST_LOG takes precedence.
log_filter = "info"

# Directory receiving shipping.log. Logs only go to stdout when unset.
# log_dir = "logs"
"#;

/// Runtime settings for the stores and their ambient services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON file holding reference locations and voyages.
    pub reference_data: Option<PathBuf>,
    /// Seed the sample set when no reference data file is configured.
    pub seed_sample_data: bool,
    /// Fallback `tracing` filter directive.
    pub log_filter: String,
    /// Directory for the log file, if file logging is wanted.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reference_data: None,
            seed_sample_data: true,
            log_filter: "info".to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default file location.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load configuration from `path`. A missing file leaves the defaults in place.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .with_context(|| format!("failed to read config {}", path.display()))?;
        settings
            .try_deserialize()
            .with_context(|| format!("invalid config in {}", path.display()))
    }
}

/// Default config path under the user's config directory.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_CONFIG_FILE)
}

/// Write the commented default config file if none exists yet.
pub fn ensure_default_config() -> Result<PathBuf> {
    let path = default_config_path();
    ensure_config_at(&path)?;
    Ok(path)
}

/// Write the default config to `path` unless a file is already there.
pub fn ensure_config_at(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() -> Result<()> {
        let dir = tempdir()?;
        let config = AppConfig::load_from(dir.path().join("absent.toml"))?;
        assert_eq!(config, AppConfig::default());
        Ok(())
    }

    #[test]
    fn default_template_round_trips_to_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("shipping").join("config.toml");

        ensure_config_at(&path)?;
        assert!(path.exists());
        assert_eq!(AppConfig::load_from(&path)?, AppConfig::default());
        Ok(())
    }

    #[test]
    fn ensure_keeps_existing_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_filter = \"debug\"\n")?;

        ensure_config_at(&path)?;
        assert_eq!(fs::read_to_string(&path)?, "log_filter = \"debug\"\n");
        Ok(())
    }

    #[test]
    fn file_values_override_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "seed_sample_data = false\nreference_data = \"/srv/reference.json\"\nlog_dir = \"logs\"\n",
        )?;

        let config = AppConfig::load_from(&path)?;
        assert!(!config.seed_sample_data);
        assert_eq!(
            config.reference_data,
            Some(PathBuf::from("/srv/reference.json"))
        );
        assert_eq!(config.log_dir, Some(PathBuf::from("logs")));
        assert_eq!(config.log_filter, "info");
        Ok(())
    }

    #[test]
    fn wrongly_typed_value_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "seed_sample_data = \"sometimes\"\n")?;

        assert!(AppConfig::load_from(&path).is_err());
        Ok(())
    }
}
