//! Derived insight views over the application state.
//!
//! All functions here are pure reads of an [`AppState`] snapshot: they never
//! touch the durable store, so they are functions of current log content
//! only. Averages cover the whole history (not windowed); the mood histogram
//! covers the most recently added entries per [`constants::MOOD_WINDOW`].

use crate::constants;
use crate::entries::{AppState, Mood, ALL_MOODS};

/// Per-category mood counts over the rolling window.
///
/// Every one of the five categories is present, including those with a zero
/// count. Counts are raw; scaling histogram bars to a display width is a
/// presentation concern, supported by [`MoodCounts::max`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodCounts {
    counts: [usize; 5],
}

impl MoodCounts {
    /// The number of windowed entries in the given category.
    pub fn count(&self, mood: Mood) -> usize {
        self.counts[mood.index()]
    }

    /// The largest per-category count, floored at 1 so presentation layers
    /// can divide by it without a zero check.
    pub fn max(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0).max(1)
    }

    /// Iterates categories in scale order with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (Mood, usize)> + '_ {
        ALL_MOODS.into_iter().map(move |m| (m, self.count(m)))
    }
}

/// Arithmetic mean of hours over all sleep entries, rounded to one decimal
/// place. Returns `None` when no sleep has been logged.
///
/// # Examples
///
/// ```
/// use solace::entries::AppState;
/// use solace::insights::average_sleep_hours;
///
/// assert_eq!(average_sleep_hours(&AppState::default()), None);
/// ```
pub fn average_sleep_hours(state: &AppState) -> Option<f64> {
    if state.sleeps.is_empty() {
        return None;
    }
    let total: f64 = state.sleeps.iter().map(|s| s.hours).sum();
    let mean = total / state.sleeps.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

/// Arithmetic mean of minutes over all activity entries, rounded to the
/// nearest whole number. Returns `None` when no activity has been logged.
pub fn average_activity_minutes(state: &AppState) -> Option<f64> {
    if state.activities.is_empty() {
        return None;
    }
    let total: f64 = state.activities.iter().map(|a| a.minutes).sum();
    Some((total / state.activities.len() as f64).round())
}

/// Counts mood occurrences over the most recently added
/// [`constants::MOOD_WINDOW`] mood entries.
///
/// The window is list-order recency, not a calendar week: entries beyond the
/// window do not affect the counts even if dated within the last seven days.
pub fn weekly_mood_counts(state: &AppState) -> MoodCounts {
    let mut counts = [0usize; 5];
    for entry in state.recent_moods(constants::MOOD_WINDOW) {
        counts[entry.mood.index()] += 1;
    }
    MoodCounts { counts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::{ActivityEntry, MoodEntry, SleepEntry};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn state_with_sleeps(hours: &[f64]) -> AppState {
        let mut state = AppState::default();
        for (i, &h) in hours.iter().enumerate() {
            state = state.with_sleep(SleepEntry {
                id: format!("s{}", i),
                date: date(),
                hours: h,
                quality: None,
            });
        }
        state
    }

    fn state_with_moods(moods: &[Mood]) -> AppState {
        // Prepend order: to make `moods[0]` most recent, add in reverse.
        let mut state = AppState::default();
        for (i, &m) in moods.iter().enumerate().rev() {
            state = state.with_mood(MoodEntry {
                id: format!("m{}", i),
                date: date(),
                mood: m,
                note: None,
            });
        }
        state
    }

    #[test]
    fn test_average_sleep_hours_mean() {
        let state = state_with_sleeps(&[6.0, 7.0, 8.0]);
        assert_eq!(average_sleep_hours(&state), Some(7.0));
    }

    #[test]
    fn test_average_sleep_hours_rounds_to_one_decimal() {
        let state = state_with_sleeps(&[7.0, 8.0, 8.0]);
        // 23 / 3 = 7.666... -> 7.7
        assert_eq!(average_sleep_hours(&state), Some(7.7));
    }

    #[test]
    fn test_average_sleep_hours_empty_is_not_available() {
        assert_eq!(average_sleep_hours(&AppState::default()), None);
    }

    #[test]
    fn test_average_sleep_hours_accepts_absurd_values() {
        // Range validation is a caller concern; the mean just reflects input.
        let state = state_with_sleeps(&[-4.0, 4.0]);
        assert_eq!(average_sleep_hours(&state), Some(0.0));
    }

    #[test]
    fn test_average_activity_minutes_rounds_to_whole() {
        let mut state = AppState::default();
        for (i, &m) in [30.0, 45.0, 20.0].iter().enumerate() {
            state = state.with_activity(ActivityEntry {
                id: format!("a{}", i),
                date: date(),
                minutes: m,
                kind: None,
            });
        }
        // 95 / 3 = 31.666... -> 32
        assert_eq!(average_activity_minutes(&state), Some(32.0));
    }

    #[test]
    fn test_average_activity_minutes_empty_is_not_available() {
        assert_eq!(average_activity_minutes(&AppState::default()), None);
    }

    #[test]
    fn test_weekly_mood_counts_all_categories_present() {
        let counts = weekly_mood_counts(&AppState::default());
        for mood in ALL_MOODS {
            assert_eq!(counts.count(mood), 0);
        }
        assert_eq!(counts.iter().count(), 5);
    }

    #[test]
    fn test_weekly_mood_counts_histogram() {
        let state = state_with_moods(&[
            Mood::Great,
            Mood::Great,
            Mood::Good,
            Mood::Neutral,
            Mood::Bad,
            Mood::Bad,
            Mood::Terrible,
        ]);

        let counts = weekly_mood_counts(&state);
        assert_eq!(counts.count(Mood::Terrible), 1);
        assert_eq!(counts.count(Mood::Bad), 2);
        assert_eq!(counts.count(Mood::Neutral), 1);
        assert_eq!(counts.count(Mood::Good), 1);
        assert_eq!(counts.count(Mood::Great), 2);
        assert_eq!(counts.max(), 2);
    }

    #[test]
    fn test_weekly_mood_counts_ignores_entries_beyond_window() {
        let mut moods = vec![Mood::Great; 7];
        moods.push(Mood::Terrible); // 8th most recent, outside the window
        let state = state_with_moods(&moods);

        let counts = weekly_mood_counts(&state);
        assert_eq!(counts.count(Mood::Great), 7);
        assert_eq!(counts.count(Mood::Terrible), 0);
    }

    #[test]
    fn test_weekly_mood_counts_window_is_recency_not_calendar() {
        // Two entries share a date; both count because the window is by
        // insertion order, not by calendar day.
        let state = state_with_moods(&[Mood::Good, Mood::Good]);
        let counts = weekly_mood_counts(&state);
        assert_eq!(counts.count(Mood::Good), 2);
    }

    #[test]
    fn test_mood_counts_max_floor_is_one() {
        let counts = weekly_mood_counts(&AppState::default());
        assert_eq!(counts.max(), 1);
    }
}
