//! Configuration structures for the review sentiment dashboard.
//!
//! This module provides strongly-typed configuration management using TOML files.
//! The configuration covers the bundled default dataset, synthetic augmentation
//! and display settings. Every section is optional in the file; missing keys
//! fall back to the defaults below.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// Main configuration structure loaded from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default dataset configuration
    pub data: DataConfig,
    /// Synthetic augmentation configuration
    pub augment: AugmentConfig,
    /// Display configuration
    pub display: DisplayConfig,
}

/// Default dataset configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the bundled zip archive used when nothing is uploaded
    pub archive_path: String,
    /// Name of the CSV member inside the archive
    pub archive_member: String,
}

/// Synthetic augmentation configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AugmentConfig {
    /// Seed for title shuffling and year sampling. Entropy-seeded when absent.
    pub seed: Option<u64>,
}

/// Display configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of rows shown in the data preview
    pub preview_rows: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            archive_path: "data/reviews.csv.zip".to_string(),
            archive_member: "reviews.csv".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { preview_rows: 10 }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read, cannot be parsed, or
    /// carries values that make no sense (an empty archive member name).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise use the default configuration.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }
        Config::load(path)
    }

    fn validate(&self) -> Result<()> {
        if self.data.archive_member.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "data.archive_member must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
