//! Error types for packaging operations.
//!
//! Every failure carries the failing operation and path, so a run reports
//! which step broke without structured output.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for packaging operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all packaging operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors without additional context
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// IO errors annotated with the failing operation and path
    #[error("{operation} failed for {}: {source}", .path.display())]
    Fs {
        /// Operation that failed (e.g. "removing file")
        operation: String,
        /// Path the operation was applied to
        path: PathBuf,
        /// Underlying IO error
        source: io::Error,
    },

    /// Missing input path (changelog or addon source)
    #[error("{operation}: path not found: {}", .path.display())]
    NotFound {
        /// Operation that needed the path
        operation: String,
        /// The missing path
        path: PathBuf,
    },

    /// Archive layer errors
    #[error("archive error: {0}")]
    ArchiveError(#[from] zip::result::ZipError),

    /// Directory traversal errors
    #[error("directory walk error: {0}")]
    WalkdirError(#[from] walkdir::Error),

    /// Relative path computation errors
    #[error("path prefix error: {0}")]
    StripPrefixError(#[from] std::path::StripPrefixError),

    /// Generic errors
    #[error("{0}")]
    GenericError(String),
}

/// Attaches operation and path context to IO results.
pub trait ErrorExt<T> {
    /// Maps an IO failure to [`Error::Fs`] naming the operation and path.
    fn fs_context(self, operation: &str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for io::Result<T> {
    fn fs_context(self, operation: &str, path: &Path) -> Result<T> {
        self.map_err(|source| Error::Fs {
            operation: operation.to_string(),
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Adds a message to optional values and fallible results.
pub trait Context<T> {
    /// Converts a missing value or an error into [`Error::GenericError`].
    fn context<S: Into<String>>(self, message: S) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<S: Into<String>>(self, message: S) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(message.into()))
    }
}

impl<T> Context<T> for Result<T> {
    fn context<S: Into<String>>(self, message: S) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{}: {}", message.into(), e)))
    }
}

/// Returns early with [`Error::GenericError`] built from format arguments.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::packager::error::Error::GenericError(format!($($arg)*)).into())
    };
}
