use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError, TravelStyle};
use crate::config::types::Config;
use crate::session::TripSelection;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/ziltrips/config.toml` on Unix,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("ziltrips").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file is not an error: built-in defaults are used.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates the configuration at `path`, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Validates the session defaults against the catalog.
    ///
    /// Checks:
    /// - The state exists in the catalog
    /// - The city belongs to that state
    /// - The travel style is known
    /// - The duration is at least one day
    pub fn validate(&self) -> Result<(), ConfigError> {
        let defaults = &self.defaults;
        let catalog = Catalog::brazil();

        let Some(state) = catalog.state(&defaults.state) else {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "State '{}' not found. Available states: {}",
                    defaults.state,
                    catalog.state_names().join(", ")
                ),
            });
        };

        if state.city(&defaults.city).is_none() {
            return Err(ConfigError::ValidationError {
                message: format!("City '{}' is not in {}", defaults.city, state.name),
            });
        }

        parse_style(&defaults.style)?;

        if defaults.days == 0 {
            return Err(ConfigError::ValidationError {
                message: "Trip duration must be at least 1 day".to_string(),
            });
        }

        Ok(())
    }

    /// The selection a new planning session starts from.
    pub fn initial_selection(&self) -> Result<TripSelection, ConfigError> {
        let defaults = &self.defaults;
        Ok(TripSelection {
            origin: defaults.origin.clone(),
            state: defaults.state.clone(),
            city: defaults.city.clone(),
            style: parse_style(&defaults.style)?,
            days: defaults.days.max(1),
        })
    }
}

fn parse_style(style: &str) -> Result<TravelStyle, ConfigError> {
    style
        .parse()
        .map_err(|e: CatalogError| ConfigError::ValidationError {
            message: e.to_string(),
        })
}
