//! Constants used throughout the application.
//!
//! This module contains all constants used in the Solace application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "solace";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str =
    "A personal wellness journal: log mood, sleep, activity and reflections";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the Solace data directory.
pub const ENV_VAR_SOLACE_DIR: &str = "SOLACE_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for the data directory within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".solace";

// File System Parameters
/// File name of the persisted application state blob inside the data directory.
pub const STATE_FILE_NAME: &str = "state.json";
/// File name of the advisory lock file inside the data directory.
pub const LOCK_FILE_NAME: &str = ".state.lock";
/// Default POSIX permissions for the data directory (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for the state file (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";

// Insights
/// Number of most-recent mood entries counted by the weekly mood histogram.
///
/// This is a list-order window over the most recently *added* entries, not a
/// calendar window: two entries logged on the same day both count, and with
/// less than one entry per day the window spans more than seven calendar days.
pub const MOOD_WINDOW: usize = 7;
/// Default number of entries shown per collection by the `recent` command.
pub const DEFAULT_RECENT_LIMIT: usize = 5;
