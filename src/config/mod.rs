//! Configuration management for the solace application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. The only setting is the
//! data directory holding the persisted state.
//!
//! # Environment Variables
//!
//! - `SOLACE_DIR`: Path to the data directory (defaults to ~/.solace)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants;
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the solace application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use solace::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Directory where the persisted state lives.
    ///
    /// Loaded from the SOLACE_DIR environment variable with a fallback to
    /// ~/.solace if not specified.
    pub data_dir: PathBuf,
}

impl fmt::Debug for Config {
    // The data directory can reveal a user name; keep it out of logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// Reads `SOLACE_DIR`, falling back to `~/.solace`, and expands the path
    /// with `shellexpand` to handle `~` and environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the resulting
    /// path is empty.
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(constants::ENV_VAR_SOLACE_DIR).unwrap_or_else(|_| {
            let home = env::var(constants::ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, constants::DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        Ok(Config { data_dir })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory path is empty or not
    /// absolute.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_absolute_path() {
        let config = Config {
            data_dir: PathBuf::from("/absolute/path"),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_relative_path() {
        let config = Config {
            data_dir: PathBuf::from("relative/path"),
        };
        match config.validate() {
            Err(AppError::Config(msg)) => assert!(msg.contains("absolute")),
            other => panic!("Expected Config error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let config = Config {
            data_dir: PathBuf::from(""),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_path() {
        let config = Config {
            data_dir: PathBuf::from("/home/someone/.solace"),
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("someone"));
        assert!(debug.contains("REDACTED"));
    }
}
