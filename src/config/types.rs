use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::session::{DEFAULT_CITY, DEFAULT_DAYS, DEFAULT_ORIGIN, DEFAULT_STATE};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial values of the planning session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Origin city (free text).
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Destination state, must exist in the catalog.
    #[serde(default = "default_state")]
    pub state: String,
    /// Destination city, must belong to `state`.
    #[serde(default = "default_city")]
    pub city: String,
    /// Travel style label or keyword (e.g. "Beach", "nightlife").
    #[serde(default = "default_style")]
    pub style: String,
    /// Trip duration in days (>= 1).
    #[serde(default = "default_days")]
    pub days: u32,
}

/// Where exported documents are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output directory (default: current directory).
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG` (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path (default: `<cache dir>/ziltrips/ziltrips.log`).
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

fn default_state() -> String {
    DEFAULT_STATE.to_string()
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

fn default_style() -> String {
    "Beach".to_string()
}

fn default_days() -> u32 {
    DEFAULT_DAYS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            state: default_state(),
            city: default_city(),
            style: default_style(),
            days: default_days(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl ExportConfig {
    pub fn export_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

impl LoggingConfig {
    /// Resolved log file location, `None` when no cache dir is known.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.file.clone().or_else(|| {
            dirs::cache_dir().map(|dir| dir.join("ziltrips").join("ziltrips.log"))
        })
    }
}
