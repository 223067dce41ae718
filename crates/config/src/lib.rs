#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for pacos
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded)
//! - Configuration file (~/.config/pacos/config.toml)
//! - Environment variables
//! - CLI flags (applied by the binary)

pub mod constants;
pub mod handle;
pub mod resolver;

pub use handle::ConfigHandle;
pub use resolver::{parse_coefficient, DefaultResolver};

use pacos_errors::{ConfigError, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub calibration: CalibrationConfig,

    #[serde(default)]
    pub paths: PathConfig,
}

/// Calibration configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CalibrationConfig {
    /// Coefficient seeded when the store is empty and no environment
    /// override is set
    pub default_coefficient: Option<f64>,
}

/// Path configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    pub db_path: Option<PathBuf>,
}

impl Config {
    /// Get the default config file path
    ///
    /// Returns `None` when the platform has no config directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pacos").join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// sets a non-finite default coefficient.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|_| ConfigError::NotFound {
                path: path.display().to_string(),
            })?;

        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an optional path or use default
    ///
    /// If path is provided, loads from that file and fails when it is missing.
    /// If path is None, the default location is used when it exists and the
    /// built-in defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path).await,
            None => match Self::default_path() {
                Some(default_path) if default_path.exists() => {
                    Self::load_from_file(&default_path).await
                }
                _ => Ok(Self::default()),
            },
        }
    }

    /// Merge with environment variables
    ///
    /// Only the database location is merged here. The default coefficient
    /// override is read live by [`DefaultResolver`] so that a changed
    /// environment is seen on the next seed without a reload.
    ///
    /// # Errors
    ///
    /// Returns an error if `PACOS_DB_PATH` is set but empty.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        if let Ok(db_path) = std::env::var(constants::DB_PATH_ENV) {
            if db_path.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: constants::DB_PATH_ENV.to_string(),
                    value: db_path,
                }
                .into());
            }
            self.paths.db_path = Some(PathBuf::from(db_path));
        }

        Ok(())
    }

    /// Get the database path (with default)
    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.paths
            .db_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_DB_PATH))
    }

    /// Get the file-configured default coefficient (with fallback)
    #[must_use]
    pub fn default_coefficient(&self) -> f64 {
        self.calibration
            .default_coefficient
            .unwrap_or(constants::FALLBACK_COEFFICIENT)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.calibration.default_coefficient {
            Some(value) if !value.is_finite() => Err(ConfigError::InvalidValue {
                field: "calibration.default_coefficient".to_string(),
                value: value.to_string(),
            }),
            _ => Ok(()),
        }
    }
}
