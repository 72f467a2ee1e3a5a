//! Error types for the directory picker.
//!
//! This module defines the centralized error type [`DirpickerError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Only [`DirpickerError::Config`] and [`DirpickerError::Io`] ever reach the caller
//! of a session. Listing and validation failures are recovered where they happen:
//! an unreadable directory renders as empty, and a rejected submission becomes an
//! inline message.

use std::path::PathBuf;
use thiserror::Error;

/// Message shown when `only_one_file` rejects a non-file submission.
pub const FILE_REQUIRED_MESSAGE: &str = "In this case, you must select a file (not a directory).";

/// The main error type for directory picker operations.
///
/// # Examples
///
/// ```
/// use dirpicker::DirpickerError;
///
/// fn validate() -> Result<(), DirpickerError> {
///     Err(DirpickerError::Config("missing required parameter `basePath`".to_string()))
/// }
///
/// assert!(validate().unwrap_err().to_string().contains("basePath"));
/// ```
#[derive(Debug, Error)]
pub enum DirpickerError {
    /// Configuration is invalid or missing.
    ///
    /// Raised synchronously by [`crate::initialize`] when `base_path` is absent,
    /// or when a configuration file cannot be read or parsed. Fatal.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A directory could not be read for a reason other than being a file.
    ///
    /// Never escapes the lister; it is logged and replaced by an empty listing.
    #[error("Cannot list {}: {source}", path.display())]
    Listing {
        /// Directory that failed to list.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The submitted target does not satisfy the session's constraints.
    ///
    /// Displayed inline; the session stays open.
    #[error("{0}")]
    Validation(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Terminal or filesystem I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for directory picker operations.
pub type Result<T> = std::result::Result<T, DirpickerError>;
