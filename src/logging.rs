// Logger setup and conditional logging macros - macros are only active in debug builds

use chrono::Local;
use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const DEFAULT_FILTER: &str = "warn";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Cannot open log file '{}': {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

/// `<cache dir>/hangman/hangman.log`
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("hangman").join("hangman.log"))
}

fn open_log_file(path: &Path) -> Result<fs::File, LoggingError> {
    let to_error = |source| LoggingError::LogFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)
}

/// Install the global logger. The level comes from `RUST_LOG`.
///
/// Output goes to `log_path` when given, keeping it off the game screen;
/// otherwise to stderr. Returns the file being written to, if any.
pub fn init_logging(log_path: Option<&Path>) -> Result<Option<PathBuf>, LoggingError> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    let written_to = match log_path {
        Some(path) => {
            let file = open_log_file(path)?;
            builder.target(Target::Pipe(Box::new(file)));
            Some(path.to_path_buf())
        }
        None => {
            builder.target(Target::Stderr);
            None
        }
    };

    builder.try_init()?;
    Ok(written_to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_is_under_hangman_dir() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("hangman/hangman.log"));
        }
    }

    #[test]
    fn test_open_log_file_creates_parent_directories() {
        let dir = std::env::temp_dir().join("hangman_logging_test").join("nested");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("test.log");

        assert!(open_log_file(&path).is_ok());
        assert!(path.exists());

        let _ = fs::remove_dir_all(std::env::temp_dir().join("hangman_logging_test"));
    }
}
