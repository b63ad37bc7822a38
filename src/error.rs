use thiserror::Error;

use crate::catalog::CatalogError;
use crate::clipboard::ClipboardError;
use crate::config::ConfigError;
use crate::export::ExportError;

/// Any failure surfaced by the planner.
#[derive(Debug, Error)]
pub enum ZilTripsError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

impl ZilTripsError {
    /// Short message for the status line.
    pub fn user_message(&self) -> &'static str {
        match self {
            ZilTripsError::Catalog(_) => "Destination not available",
            ZilTripsError::Config(_) => "Configuration problem",
            ZilTripsError::Export(_) => "PDF export failed",
            ZilTripsError::Clipboard(_) => "Could not copy to clipboard",
        }
    }
}

pub type Result<T> = std::result::Result<T, ZilTripsError>;
