//! Configuration for medrec
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a medrec instance
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted collection (a single CSV file).
    /// Created on first write; a missing file reads as an empty
    /// collection, never as an error.
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./patients.csv"),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file (the persisted patient collection)
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
