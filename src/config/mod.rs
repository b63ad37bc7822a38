//! TOML configuration: session defaults, export location and logging.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults, ExportConfig, LoggingConfig};
