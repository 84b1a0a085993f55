/*!
# Solace - A Personal Wellness Journal

Command-line front end for the wellness log. This file contains the main
application flow, coordinating the components: logging setup, argument
parsing, configuration, the durable store, the tracker, and rendering of
command output.

## Usage

```
solace <COMMAND>

Commands:
  mood      Log how you are feeling
  journal   Write a free-text journal entry
  sleep     Log a night of sleep
  activity  Log an activity session
  insights  Show aggregated insights over the whole log
  recent    List the most recent entries in each collection
```

## Configuration

- `SOLACE_DIR`: The directory holding the persisted state (defaults to
  "~/.solace")
*/

use solace::cli::{self, CliArgs, Command};
use solace::config::Config;
use solace::entries::Mood;
use solace::errors::{AppError, AppResult};
use solace::insights::MoodCounts;
use solace::store::{self, StateStore};
use solace::tracker::WellnessTracker;
use std::str::FromStr;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Width of the widest histogram bar in `insights` output.
const HISTOGRAM_BAR_WIDTH: usize = 16;

/// The main entry point for the solace application.
///
/// Coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes logging (to stderr, so stdout stays clean for output)
/// 3. Loads and validates configuration
/// 4. Ensures the data directory exists and opens the durable store
/// 5. Initializes the tracker from persisted state
/// 6. Dispatches the requested command
///
/// # Errors
///
/// Returns configuration errors, store lock/startup errors, and entry errors
/// (unparseable mood or date on the command line). Load and save failures
/// inside the tracker deliberately do not surface here; they degrade to
/// warnings per the store's fallback policy.
fn main() -> AppResult<()> {
    let args = CliArgs::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting solace");
    debug!("CLI arguments: {:?}", args);

    let config = Config::load()?;
    config.validate()?;

    store::ensure_data_directory_exists(&config.data_dir)?;
    let state_store = StateStore::open(&config.data_dir)?;
    let mut tracker = WellnessTracker::initialize(state_store);

    match args.command {
        Command::Mood { mood, note, date } => {
            let mood = Mood::from_str(&mood).map_err(AppError::Entry)?;
            let date = cli::parse_optional_date(date.as_deref())?;
            let entry = tracker.add_mood(mood, note, date);
            println!("Logged mood {} {} for {}", entry.mood, entry.mood.glyph(), entry.date);
        }
        Command::Journal { text, date } => {
            let date = cli::parse_optional_date(date.as_deref())?;
            let entry = tracker.add_journal(text, date);
            println!("Logged journal entry for {}", entry.date);
        }
        Command::Sleep {
            hours,
            quality,
            date,
        } => {
            let date = cli::parse_optional_date(date.as_deref())?;
            let entry = tracker.add_sleep(hours, quality, date);
            println!("Logged {} h of sleep for {}", entry.hours, entry.date);
        }
        Command::Activity {
            minutes,
            kind,
            date,
        } => {
            let date = cli::parse_optional_date(date.as_deref())?;
            let entry = tracker.add_activity(minutes, kind, date);
            println!("Logged {} min of activity for {}", entry.minutes, entry.date);
        }
        Command::Insights => print_insights(&tracker),
        Command::Recent { limit } => print_recent(&tracker, limit),
    }

    Ok(())
}

/// Renders the insight views: averages over the whole log and the mood
/// histogram over the most recent entries.
fn print_insights(tracker: &WellnessTracker) {
    println!("Insights");

    match tracker.average_sleep_hours() {
        Some(avg) => println!("  Avg sleep     {:.1} h", avg),
        None => println!("  Avg sleep     N/A"),
    }
    match tracker.average_activity_minutes() {
        Some(avg) => println!("  Avg activity  {:.0} min", avg),
        None => println!("  Avg activity  N/A"),
    }

    println!("  Mood (last {} entries)", solace::constants::MOOD_WINDOW);
    print_mood_histogram(&tracker.weekly_mood_counts());
}

/// Renders the per-category counts as bars scaled to the largest count.
fn print_mood_histogram(counts: &MoodCounts) {
    let max = counts.max();
    for (mood, count) in counts.iter() {
        let bar_len = count * HISTOGRAM_BAR_WIDTH / max;
        println!(
            "    {} {:<8} {:<width$} {}",
            mood.glyph(),
            mood.label(),
            "█".repeat(bar_len),
            count,
            width = HISTOGRAM_BAR_WIDTH
        );
    }
}

/// Lists the `limit` most recent entries per collection, in recency order.
fn print_recent(tracker: &WellnessTracker, limit: usize) {
    let state = tracker.state();

    println!("Moods");
    for entry in state.recent_moods(limit) {
        match &entry.note {
            Some(note) => println!("  {}  {} {}: {}", entry.date, entry.mood.glyph(), entry.mood, note),
            None => println!("  {}  {} {}", entry.date, entry.mood.glyph(), entry.mood),
        }
    }

    println!("Journal");
    for entry in state.recent_journals(limit) {
        println!("  {}  {}", entry.date, entry.text);
    }

    println!("Sleep");
    for entry in state.recent_sleeps(limit) {
        match entry.quality {
            Some(quality) => println!("  {}  {} h (quality {})", entry.date, entry.hours, quality),
            None => println!("  {}  {} h", entry.date, entry.hours),
        }
    }

    println!("Activity");
    for entry in state.recent_activities(limit) {
        match &entry.kind {
            Some(kind) => println!("  {}  {} min ({})", entry.date, entry.minutes, kind),
            None => println!("  {}  {} min", entry.date, entry.minutes),
        }
    }
}
