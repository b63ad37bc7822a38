//! PDF export of the trip summary.

mod pdf;
mod text;

pub use pdf::{render_pdf, DOCUMENT_TITLE};
pub use text::to_latin1_lossy;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::summary::TripSummary;

pub const EXPORT_FILE_NAME: &str = "ZilTrips_Travel_Plan.pdf";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to render PDF: {0}")]
    Render(String),

    #[error("Failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes the summary PDF as [`EXPORT_FILE_NAME`] inside `dir`, creating the
/// directory when needed. Returns the written path.
pub fn export_pdf(summary: &TripSummary, dir: &Path) -> Result<PathBuf, ExportError> {
    let bytes = render_pdf(summary)?;

    fs::create_dir_all(dir).map_err(|e| ExportError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, &bytes).map_err(|e| ExportError::Io {
        path: path.clone(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "Exported travel plan");
    Ok(path)
}
