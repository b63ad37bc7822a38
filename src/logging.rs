use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Installs the global `tracing` subscriber.
///
/// Output goes to a log file because the terminal belongs to the UI.
/// `RUST_LOG` takes precedence over the configured level. Returns the log
/// path, or `None` when no file could be opened (logging stays off).
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    let path = config.log_path()?;
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Logging disabled: cannot open {}: {}", path.display(), err);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok();

    installed.then_some(path)
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
