//! Core entry types and the in-memory application state.
//!
//! This module contains the pure data model without any I/O operations: the
//! four entry kinds (mood, journal, sleep, activity), the closed five-value
//! mood scale, and the `AppState` aggregate holding all logged entries.
//!
//! Entries are immutable once created. The only state "mutation" is building
//! a new `AppState` with one entry prepended to the relevant sequence; a
//! previously captured state value is never modified.

use crate::constants;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed five-value ordinal mood scale.
///
/// The set of categories is fixed; insight views report a count for every
/// category even when it is zero.
///
/// # Examples
///
/// ```
/// use solace::entries::Mood;
/// use std::str::FromStr;
///
/// let mood = Mood::from_str("good").unwrap();
/// assert_eq!(mood, Mood::Good);
/// assert_eq!(mood.to_string(), "good");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// The lowest point of the scale.
    Terrible,
    /// Below neutral.
    Bad,
    /// Neither good nor bad.
    Neutral,
    /// Above neutral.
    Good,
    /// The highest point of the scale.
    Great,
}

/// All mood categories in ascending scale order.
///
/// Insight views iterate this to produce a histogram bucket per category,
/// including zero-count ones.
pub const ALL_MOODS: [Mood; 5] = [
    Mood::Terrible,
    Mood::Bad,
    Mood::Neutral,
    Mood::Good,
    Mood::Great,
];

impl Mood {
    /// Position of this mood in [`ALL_MOODS`], used as a histogram index.
    pub fn index(self) -> usize {
        match self {
            Mood::Terrible => 0,
            Mood::Bad => 1,
            Mood::Neutral => 2,
            Mood::Good => 3,
            Mood::Great => 4,
        }
    }

    /// The display glyph for this mood.
    pub fn glyph(self) -> &'static str {
        match self {
            Mood::Terrible => "😫",
            Mood::Bad => "😕",
            Mood::Neutral => "😐",
            Mood::Good => "🙂",
            Mood::Great => "😄",
        }
    }

    /// The lowercase label for this mood, as persisted and as accepted on the
    /// command line.
    pub fn label(self) -> &'static str {
        match self {
            Mood::Terrible => "terrible",
            Mood::Bad => "bad",
            Mood::Neutral => "neutral",
            Mood::Good => "good",
            Mood::Great => "great",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terrible" => Ok(Mood::Terrible),
            "bad" => Ok(Mood::Bad),
            "neutral" => Ok(Mood::Neutral),
            "good" => Ok(Mood::Good),
            "great" => Ok(Mood::Great),
            other => Err(format!(
                "Unknown mood '{}'. Expected one of: terrible, bad, neutral, good, great",
                other
            )),
        }
    }
}

/// A logged mood with an optional free-text note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Opaque unique identifier, generated at creation and never reused.
    pub id: String,
    /// Calendar day the entry is keyed to.
    pub date: NaiveDate,
    /// The logged mood category.
    pub mood: Mood,
    /// Optional note attached to the mood.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A free-text journal entry. No length cap is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Opaque unique identifier, generated at creation and never reused.
    pub id: String,
    /// Calendar day the entry is keyed to.
    pub date: NaiveDate,
    /// The journal text.
    pub text: String,
}

/// A logged night of sleep.
///
/// Hours are accepted as supplied, negative or absurd values included; range
/// validation belongs to the collaborator feeding the core, not to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepEntry {
    /// Opaque unique identifier, generated at creation and never reused.
    pub id: String,
    /// Calendar day the entry is keyed to.
    pub date: NaiveDate,
    /// Hours slept.
    pub hours: f64,
    /// Optional subjective sleep quality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
}

/// A logged activity session. Minutes are accepted as supplied, unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Opaque unique identifier, generated at creation and never reused.
    pub id: String,
    /// Calendar day the entry is keyed to.
    pub date: NaiveDate,
    /// Minutes of activity.
    pub minutes: f64,
    /// Optional kind of activity (e.g. "run", "yoga").
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    pub kind: Option<String>,
}

/// The aggregate of all four entry sequences at a point in time.
///
/// Each sequence is ordered most-recent-first: new entries are prepended,
/// never appended, so "recent N" is simply the first N elements. All read
/// views depend on this ordering.
///
/// `AppState` values are immutable in practice: the `with_*` constructors
/// return a new state and leave `self` untouched, so any previously captured
/// state remains valid for its holder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Logged moods, most recent first.
    #[serde(default)]
    pub moods: Vec<MoodEntry>,
    /// Journal entries, most recent first.
    #[serde(default)]
    pub journals: Vec<JournalEntry>,
    /// Sleep entries, most recent first.
    #[serde(default)]
    pub sleeps: Vec<SleepEntry>,
    /// Activity entries, most recent first.
    #[serde(default)]
    pub activities: Vec<ActivityEntry>,
}

impl AppState {
    /// Returns a new state with `entry` prepended to the mood sequence.
    pub fn with_mood(&self, entry: MoodEntry) -> AppState {
        let mut moods = Vec::with_capacity(self.moods.len() + 1);
        moods.push(entry);
        moods.extend(self.moods.iter().cloned());
        AppState {
            moods,
            ..self.clone()
        }
    }

    /// Returns a new state with `entry` prepended to the journal sequence.
    pub fn with_journal(&self, entry: JournalEntry) -> AppState {
        let mut journals = Vec::with_capacity(self.journals.len() + 1);
        journals.push(entry);
        journals.extend(self.journals.iter().cloned());
        AppState {
            journals,
            ..self.clone()
        }
    }

    /// Returns a new state with `entry` prepended to the sleep sequence.
    pub fn with_sleep(&self, entry: SleepEntry) -> AppState {
        let mut sleeps = Vec::with_capacity(self.sleeps.len() + 1);
        sleeps.push(entry);
        sleeps.extend(self.sleeps.iter().cloned());
        AppState {
            sleeps,
            ..self.clone()
        }
    }

    /// Returns a new state with `entry` prepended to the activity sequence.
    pub fn with_activity(&self, entry: ActivityEntry) -> AppState {
        let mut activities = Vec::with_capacity(self.activities.len() + 1);
        activities.push(entry);
        activities.extend(self.activities.iter().cloned());
        AppState {
            activities,
            ..self.clone()
        }
    }

    /// The `n` most recently added mood entries, in recency order.
    pub fn recent_moods(&self, n: usize) -> &[MoodEntry] {
        &self.moods[..n.min(self.moods.len())]
    }

    /// The `n` most recently added journal entries, in recency order.
    pub fn recent_journals(&self, n: usize) -> &[JournalEntry] {
        &self.journals[..n.min(self.journals.len())]
    }

    /// The `n` most recently added sleep entries, in recency order.
    pub fn recent_sleeps(&self, n: usize) -> &[SleepEntry] {
        &self.sleeps[..n.min(self.sleeps.len())]
    }

    /// The `n` most recently added activity entries, in recency order.
    pub fn recent_activities(&self, n: usize) -> &[ActivityEntry] {
        &self.activities[..n.min(self.activities.len())]
    }

    /// True when no entries of any kind have been logged.
    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
            && self.journals.is_empty()
            && self.sleeps.is_empty()
            && self.activities.is_empty()
    }
}

/// Parses a date string in YYYY-MM-DD or YYYYMMDD format.
///
/// # Examples
///
/// ```
/// use solace::entries::parse_date;
///
/// assert!(parse_date("2024-03-01").is_ok());
/// assert!(parse_date("20240301").is_ok());
/// assert!(parse_date("March 1st").is_err());
/// ```
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, constants::DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(date_str, constants::DATE_FORMAT_COMPACT))
}
