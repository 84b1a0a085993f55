//! Error handling utilities for the solace application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents specific error cases that can occur in the durable state store.
///
/// This enum provides detailed, contextual error information for the different
/// failure modes of loading and saving the persisted application state. Each
/// variant captures the affected path and, where applicable, the underlying
/// I/O or serialization error.
///
/// # Examples
///
/// ```
/// use solace::errors::StoreError;
/// use std::io::{self, ErrorKind};
/// use std::path::PathBuf;
///
/// let io_error = io::Error::new(ErrorKind::PermissionDenied, "permission denied");
/// let error = StoreError::ReadFailed {
///     path: PathBuf::from("/data/state.json"),
///     source: io_error,
/// };
///
/// assert!(format!("{}", error).contains("state.json"));
/// assert!(format!("{}", error).contains("permission denied"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// Error when the state file is already locked by another process.
    #[error("State file is currently in use by another process: {path}. Please wait for the other solace instance to exit.")]
    FileBusy {
        /// The path to the lock file that is held
        path: PathBuf,
    },

    /// Error when acquiring the advisory lock fails for a technical reason.
    #[error("Failed to acquire lock for state file {path}: {source}. Please check file permissions and ensure the data directory is accessible.")]
    LockFailed {
        /// The path to the lock file that couldn't be locked
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when reading the persisted state file fails.
    #[error("Failed to read state file {path}: {source}")]
    ReadFailed {
        /// The path to the state file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when writing the persisted state file fails.
    #[error("Failed to write state file {path}: {source}")]
    WriteFailed {
        /// The path to the state file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the persisted blob exists but cannot be parsed into the
    /// expected application state shape.
    ///
    /// Callers treat this the same as a missing file after logging a warning:
    /// the application proceeds with an empty default state. There is no
    /// version tag on the blob, so a schema change surfaces as this error.
    #[error("State file {path} is not valid saved state: {source}")]
    Deserialization {
        /// The path to the state file
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Error when the current state cannot be serialized for persistence.
    #[error("Failed to serialize application state: {source}")]
    Serialization {
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Represents all possible errors that can occur in the solace application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error`
/// trait implementation and formatted error messages.
///
/// Note: This type does not implement `Clone` to avoid losing error context when
/// cloning `std::io::Error` values.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use solace::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use solace::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading or validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// General I/O error outside the store boundary.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Durable store error.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Entry-level error, such as an unparseable mood word or date string
    /// supplied on the command line.
    #[error("Entry error: {0}")]
    Entry(String),
}

/// Convenience alias for results with the application error type.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_from_store_error() {
        let store_error = StoreError::FileBusy {
            path: PathBuf::from("/data/.state.lock"),
        };
        let app_error: AppError = store_error.into();

        match app_error {
            AppError::Store(StoreError::FileBusy { path }) => {
                assert_eq!(path, PathBuf::from("/data/.state.lock"));
            }
            _ => panic!("Expected AppError::Store variant"),
        }
    }

    #[test]
    fn test_store_error_display_includes_path() {
        let io_error = io::Error::new(ErrorKind::PermissionDenied, "permission denied");
        let error = StoreError::WriteFailed {
            path: PathBuf::from("/data/state.json"),
            source: io_error,
        };

        let message = format!("{}", error);
        assert!(message.contains("/data/state.json"));
        assert!(message.contains("permission denied"));
    }

    #[test]
    fn test_deserialization_error_display() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = StoreError::Deserialization {
            path: PathBuf::from("/data/state.json"),
            source: json_error,
        };

        let message = format!("{}", error);
        assert!(message.contains("not valid saved state"));
        assert!(message.contains("/data/state.json"));
    }

    #[test]
    fn test_app_error_display() {
        let config_error = AppError::Config("Invalid configuration".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Invalid configuration"
        );

        let entry_error = AppError::Entry("Unknown mood: 'meh'".to_string());
        assert_eq!(format!("{}", entry_error), "Entry error: Unknown mood: 'meh'");
    }
}
