/*!
# Solace

Solace is a personal wellness journal: log mood, sleep, activity and free-text
reflections with minimal friction, and view simple aggregated insights over
what you have logged. All entries persist locally across sessions, keyed to
the day they were recorded.

## Core Features

- Log a mood on a five-value scale, with an optional note
- Write free-text journal entries
- Log sleep (hours, optional quality) and activity (minutes, optional kind)
- Insights: average sleep, average activity, mood histogram over the most
  recent entries
- Backdate any entry with `--date`

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `entries`: The pure data model (entry kinds and the `AppState` aggregate)
- `insights`: Pure aggregation views over a state snapshot
- `store`: The durable store (one JSON blob, atomic replace, advisory lock)
- `tracker`: The entry log and aggregator owning the in-memory state

## Usage Example

```rust,no_run
use solace::entries::Mood;
use solace::store::{self, StateStore};
use solace::tracker::WellnessTracker;
use solace::Config;

fn main() -> solace::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    store::ensure_data_directory_exists(&config.data_dir)?;
    let store = StateStore::open(&config.data_dir)?;
    let mut tracker = WellnessTracker::initialize(store);

    tracker.add_mood(Mood::Good, None, None);
    println!("moods logged: {}", tracker.state().moods.len());
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// The pure data model: entry kinds and the application state aggregate
pub mod entries;
/// Error types and utilities for error handling
pub mod errors;
/// Derived insight views over the application state
pub mod insights;
/// The durable state store
pub mod store;
/// The entry log and aggregator
pub mod tracker;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use entries::{AppState, Mood};
pub use errors::{AppError, AppResult};
pub use tracker::WellnessTracker;
