//! The entry log and aggregator.
//!
//! [`WellnessTracker`] holds the canonical in-memory [`AppState`], applies
//! the four append operations, and exposes the derived insight views. It is
//! the single writer of the durable store it owns.
//!
//! # Lifecycle
//!
//! Initialization is a constructor: a tracker value does not exist until the
//! initial load has settled, so no read or write can observe a
//! half-initialized log. Load failure of any
//! kind (missing, unreadable, or corrupt blob) degrades to the empty default
//! state with a logged warning; initialization itself never fails.
//!
//! # Durability
//!
//! Every mutation commits to memory first, then attempts one whole-state
//! save. A failed save is logged and not rolled back or retried: the entry
//! stays visible in-session and the next successful save converges the disk
//! copy. This is an at-least-attempted write, not a guaranteed-durable one.

use crate::entries::{ActivityEntry, AppState, JournalEntry, Mood, MoodEntry, SleepEntry};
use crate::insights::{self, MoodCounts};
use crate::store::StateStore;
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Callback invoked with the new state after every successful mutation.
pub type Subscriber = Box<dyn Fn(&AppState)>;

/// The in-memory entry log with its durable store.
///
/// # Examples
///
/// ```no_run
/// use solace::entries::Mood;
/// use solace::store::StateStore;
/// use solace::tracker::WellnessTracker;
/// use std::path::Path;
///
/// let store = StateStore::open(Path::new("/home/me/.solace"))?;
/// let mut tracker = WellnessTracker::initialize(store);
///
/// tracker.add_mood(Mood::Good, Some("calm morning".to_string()), None);
/// assert_eq!(tracker.state().moods.len(), 1);
/// # Ok::<(), solace::errors::AppError>(())
/// ```
pub struct WellnessTracker {
    store: StateStore,
    state: Arc<AppState>,
    subscribers: Vec<Subscriber>,
}

impl WellnessTracker {
    /// Loads persisted state and returns a ready tracker.
    ///
    /// Adopts the persisted snapshot when one loads cleanly; otherwise logs
    /// a warning and adopts the empty default. A corrupt blob is deliberately
    /// treated like a missing one (lossy recovery, the data stays on disk
    /// until the next save overwrites it).
    pub fn initialize(store: StateStore) -> Self {
        let state = match store.load() {
            Ok(Some(state)) => state,
            Ok(None) => {
                info!("No persisted state found, starting with an empty log");
                AppState::default()
            }
            Err(e) => {
                warn!("Failed to load persisted state, starting empty: {}", e);
                AppState::default()
            }
        };

        WellnessTracker {
            store,
            state: Arc::new(state),
            subscribers: Vec::new(),
        }
    }

    /// A shared snapshot of the current state.
    ///
    /// The snapshot is immutable and remains valid and unchanged across any
    /// later mutations; callers may hold it as long as they like.
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Registers a callback to run after every successful mutation.
    pub fn subscribe(&mut self, subscriber: impl Fn(&AppState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Logs a mood entry. Returns the created entry.
    pub fn add_mood(
        &mut self,
        mood: Mood,
        note: Option<String>,
        date: Option<NaiveDate>,
    ) -> MoodEntry {
        let entry = MoodEntry {
            id: fresh_id(),
            date: resolve_date(date),
            mood,
            note,
        };
        debug!(id = %entry.id, mood = %entry.mood, "Adding mood entry");
        self.commit(self.state.with_mood(entry.clone()));
        entry
    }

    /// Logs a journal entry. Returns the created entry.
    pub fn add_journal(&mut self, text: String, date: Option<NaiveDate>) -> JournalEntry {
        let entry = JournalEntry {
            id: fresh_id(),
            date: resolve_date(date),
            text,
        };
        debug!(id = %entry.id, "Adding journal entry");
        self.commit(self.state.with_journal(entry.clone()));
        entry
    }

    /// Logs a sleep entry. Hours and quality are accepted as supplied; range
    /// validation is the caller's concern. Returns the created entry.
    pub fn add_sleep(
        &mut self,
        hours: f64,
        quality: Option<f64>,
        date: Option<NaiveDate>,
    ) -> SleepEntry {
        let entry = SleepEntry {
            id: fresh_id(),
            date: resolve_date(date),
            hours,
            quality,
        };
        debug!(id = %entry.id, hours = entry.hours, "Adding sleep entry");
        self.commit(self.state.with_sleep(entry.clone()));
        entry
    }

    /// Logs an activity entry. Minutes are accepted as supplied. Returns the
    /// created entry.
    pub fn add_activity(
        &mut self,
        minutes: f64,
        kind: Option<String>,
        date: Option<NaiveDate>,
    ) -> ActivityEntry {
        let entry = ActivityEntry {
            id: fresh_id(),
            date: resolve_date(date),
            minutes,
            kind,
        };
        debug!(id = %entry.id, minutes = entry.minutes, "Adding activity entry");
        self.commit(self.state.with_activity(entry.clone()));
        entry
    }

    /// Average sleep hours over the full log, rounded to one decimal place.
    /// `None` when no sleep has been logged.
    pub fn average_sleep_hours(&self) -> Option<f64> {
        insights::average_sleep_hours(&self.state)
    }

    /// Average activity minutes over the full log, rounded to a whole number.
    /// `None` when no activity has been logged.
    pub fn average_activity_minutes(&self) -> Option<f64> {
        insights::average_activity_minutes(&self.state)
    }

    /// Mood counts over the most recently added entries (see
    /// [`crate::constants::MOOD_WINDOW`]).
    pub fn weekly_mood_counts(&self) -> MoodCounts {
        insights::weekly_mood_counts(&self.state)
    }

    /// Adopts `next` as the current state, attempts one whole-state save,
    /// and notifies subscribers.
    ///
    /// The in-memory commit stands regardless of the save outcome.
    fn commit(&mut self, next: AppState) {
        self.state = Arc::new(next);

        if let Err(e) = self.store.save(&self.state) {
            warn!("Failed to persist state, entry kept in memory: {}", e);
        }

        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
    }
}

/// Generates a fresh entry id.
///
/// Drawn from the 122-bit random UUID space; uniqueness is probabilistic and
/// not checked against existing ids.
fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// The caller-supplied date, or today in the user's local timezone.
fn resolve_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}
