//! Reference locations and voyages the read-only stores are seeded with.

use std::{fs, path::Path};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::AppConfig,
    models::{sample, Location, Voyage},
};

/// Seed data for the location and voyage stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReferenceData {
    /// Known locations.
    #[serde(default)]
    pub locations: Vec<Location>,
    /// Scheduled voyages.
    #[serde(default)]
    pub voyages: Vec<Voyage>,
}

impl ReferenceData {
    /// The built-in sample set.
    pub fn sample() -> Self {
        Self {
            locations: sample::locations(),
            voyages: sample::voyages(),
        }
    }

    /// Load reference data from the given path, returning `None` if it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read reference data {}", path.display()))?;
        let data = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse reference data {}", path.display()))?;
        Ok(Some(data))
    }

    /// Persist reference data to the given file, creating parent directories if needed.
    pub fn persist(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create reference data directory {}", parent.display())
            })?;
        }

        let serialized =
            serde_json::to_string_pretty(self).context("failed to serialize reference data")?;
        fs::write(path, serialized)
            .with_context(|| format!("failed to write reference data {}", path.display()))
    }

    /// Pick the reference data selected by `config`.
    ///
    /// A configured file must exist. Without one, the sample set is used
    /// unless sample seeding is switched off, in which case the stores start
    /// empty.
    pub fn resolve(config: &AppConfig) -> Result<Self> {
        if let Some(path) = &config.reference_data {
            debug!("loading reference data from {}", path.display());
            return Self::load(path)?
                .ok_or_else(|| anyhow!("reference data file {} not found", path.display()));
        }
        if config.seed_sample_data {
            Ok(Self::sample())
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn persist_and_load() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("reference.json");
        let data = ReferenceData::sample();

        data.persist(&path)?;
        let loaded = ReferenceData::load(&path)?.expect("file was just written");

        assert_eq!(loaded, data);
        Ok(())
    }

    #[test]
    fn load_missing_file_is_none() -> Result<()> {
        let dir = tempdir()?;
        assert!(ReferenceData::load(dir.path().join("absent.json"))?.is_none());
        Ok(())
    }

    #[test]
    fn load_rejects_malformed_json() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json")?;

        let err = ReferenceData::load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse reference data"));
        Ok(())
    }

    #[test]
    fn hand_written_file_may_omit_voyages() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("ports.json");
        fs::write(
            &path,
            r#"{ "locations": [ { "unlocode": "SESO", "name": "Stockholm" } ] }"#,
        )?;

        let data = ReferenceData::load(&path)?.expect("file exists");
        assert_eq!(data.locations, vec![Location::new("SESO", "Stockholm")]);
        assert!(data.voyages.is_empty());
        Ok(())
    }

    #[test]
    fn resolve_follows_config() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("reference.json");

        let mut config = AppConfig::default();
        assert_eq!(ReferenceData::resolve(&config)?, ReferenceData::sample());

        config.seed_sample_data = false;
        assert_eq!(ReferenceData::resolve(&config)?, ReferenceData::default());

        config.reference_data = Some(path.clone());
        assert!(ReferenceData::resolve(&config).is_err());

        let custom = ReferenceData {
            locations: vec![Location::new("FIHEL", "Helsinki")],
            voyages: Vec::new(),
        };
        custom.persist(&path)?;
        assert_eq!(ReferenceData::resolve(&config)?, custom);
        Ok(())
    }
}
