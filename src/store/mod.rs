//! The durable state store.
//!
//! This module owns the canonical on-disk representation of the application
//! state: one JSON blob (`state.json`) inside the data directory, holding the
//! four entry sequences. The whole state is always written as one unit via a
//! temp file and an atomic rename, so the last complete write wins and a
//! partially written blob is never visible under the canonical name.
//!
//! The store holds an exclusive advisory lock on a lock file for its whole
//! lifetime. The core's contract assumes a single writer; the lock turns a
//! violation of that assumption into a startup error instead of interleaved
//! writes.

use crate::constants;
use crate::entries::AppState;
use crate::errors::{AppError, AppResult, StoreError};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
#[cfg(unix)]
use std::fs::Permissions;
use std::io::{ErrorKind, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Ensures the data directory exists, creating it if necessary.
///
/// Created directories get restrictive permissions (0o700 on Unix): the state
/// file holds private wellness entries.
///
/// # Errors
///
/// Returns:
/// - `AppError::Config` if the provided path is not an absolute path
/// - `AppError::Io` if directory creation or permission setting fails
pub fn ensure_data_directory_exists(data_dir: &Path) -> AppResult<()> {
    if !data_dir.is_absolute() {
        return Err(AppError::Config(format!(
            "Data directory path must be absolute: {}",
            data_dir.display()
        )));
    }

    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            let permissions = Permissions::from_mode(constants::DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(data_dir, permissions).map_err(|e| {
                AppError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to set permissions on data directory: {}", e),
                ))
            })?;
            debug!("Set 0o700 permissions on data directory");
        }
    }
    Ok(())
}

/// Handle to the persisted application state.
///
/// Opening the store acquires the advisory lock; dropping it releases the
/// lock. `load` and `save` always operate on the complete state.
///
/// # Examples
///
/// ```no_run
/// use solace::entries::AppState;
/// use solace::store::StateStore;
/// use std::path::Path;
///
/// let store = StateStore::open(Path::new("/home/me/.solace"))?;
/// let state = store.load()?.unwrap_or_default();
/// store.save(&state)?;
/// # Ok::<(), solace::errors::AppError>(())
/// ```
#[derive(Debug)]
pub struct StateStore {
    state_path: PathBuf,
    data_dir: PathBuf,
    // Held for the lifetime of the store; the advisory lock is released when
    // this file handle is dropped.
    _lock_file: File,
}

impl StateStore {
    /// Opens the store over `data_dir`, acquiring the exclusive lock.
    ///
    /// The directory must already exist (see [`ensure_data_directory_exists`]).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileBusy` if another process holds the lock, or
    /// `StoreError::LockFailed` if the lock file cannot be created or locked.
    pub fn open(data_dir: &Path) -> AppResult<Self> {
        let lock_path = data_dir.join(constants::LOCK_FILE_NAME);

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)
            .map_err(|e| StoreError::LockFailed {
                path: lock_path.clone(),
                source: e,
            })?;

        lock_file.try_lock_exclusive().map_err(|e| {
            if e.kind() == ErrorKind::WouldBlock {
                StoreError::FileBusy {
                    path: lock_path.clone(),
                }
            } else {
                StoreError::LockFailed {
                    path: lock_path.clone(),
                    source: e,
                }
            }
        })?;

        debug!("Acquired state lock: {:?}", lock_path);

        Ok(StateStore {
            state_path: data_dir.join(constants::STATE_FILE_NAME),
            data_dir: data_dir.to_path_buf(),
            _lock_file: lock_file,
        })
    }

    /// Path of the persisted state blob.
    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    /// Reads and deserializes the persisted state.
    ///
    /// Returns `Ok(None)` when no state has ever been saved. A blob that
    /// exists but cannot be parsed is a [`StoreError::Deserialization`];
    /// callers are expected to log it and fall back to the empty default
    /// rather than abort.
    pub fn load(&self) -> Result<Option<AppState>, StoreError> {
        let raw = match fs::read_to_string(&self.state_path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No state file at {:?}", self.state_path);
                return Ok(None);
            }
            Err(e) => {
                return Err(StoreError::ReadFailed {
                    path: self.state_path.clone(),
                    source: e,
                })
            }
        };

        let state: AppState =
            serde_json::from_str(&raw).map_err(|e| StoreError::Deserialization {
                path: self.state_path.clone(),
                source: e,
            })?;

        info!(
            moods = state.moods.len(),
            journals = state.journals.len(),
            sleeps = state.sleeps.len(),
            activities = state.activities.len(),
            "Loaded persisted state"
        );
        Ok(Some(state))
    }

    /// Serializes and persists the complete state, replacing the previous
    /// blob atomically.
    ///
    /// The state is written to a temp file in the data directory and renamed
    /// over the canonical name, so a crash mid-write leaves the previous blob
    /// intact.
    pub fn save(&self, state: &AppState) -> Result<(), StoreError> {
        let raw =
            serde_json::to_string(state).map_err(|e| StoreError::Serialization { source: e })?;

        let mut tmp = NamedTempFile::new_in(&self.data_dir).map_err(|e| {
            StoreError::WriteFailed {
                path: self.state_path.clone(),
                source: e,
            }
        })?;

        tmp.write_all(raw.as_bytes())
            .map_err(|e| StoreError::WriteFailed {
                path: self.state_path.clone(),
                source: e,
            })?;

        #[cfg(unix)]
        tmp.as_file()
            .set_permissions(Permissions::from_mode(constants::DEFAULT_FILE_PERMISSIONS))
            .map_err(|e| StoreError::WriteFailed {
                path: self.state_path.clone(),
                source: e,
            })?;

        tmp.persist(&self.state_path)
            .map_err(|e| StoreError::WriteFailed {
                path: self.state_path.clone(),
                source: e.error,
            })?;

        debug!("Persisted state to {:?}", self.state_path);
        Ok(())
    }
}
