use crate::constants;
use crate::entries;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// A personal wellness journal
#[derive(Parser, Debug)]
#[clap(name = "solace", about = "A personal wellness journal: log mood, sleep, activity and reflections")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

/// The operations exposed on the command line, one per core operation plus
/// the two read-side views.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log how you are feeling
    Mood {
        /// One of: terrible, bad, neutral, good, great
        mood: String,

        /// Optional note attached to the mood
        #[clap(short, long)]
        note: Option<String>,

        /// Day to record against (YYYY-MM-DD or YYYYMMDD, defaults to today)
        #[clap(short, long)]
        date: Option<String>,
    },

    /// Write a free-text journal entry
    Journal {
        /// The journal text
        text: String,

        /// Day to record against (YYYY-MM-DD or YYYYMMDD, defaults to today)
        #[clap(short, long)]
        date: Option<String>,
    },

    /// Log a night of sleep
    Sleep {
        /// Hours slept
        hours: f64,

        /// Subjective sleep quality
        #[clap(short, long)]
        quality: Option<f64>,

        /// Day to record against (YYYY-MM-DD or YYYYMMDD, defaults to today)
        #[clap(short, long)]
        date: Option<String>,
    },

    /// Log an activity session
    Activity {
        /// Minutes of activity
        minutes: f64,

        /// Kind of activity (e.g. run, yoga)
        #[clap(short, long)]
        kind: Option<String>,

        /// Day to record against (YYYY-MM-DD or YYYYMMDD, defaults to today)
        #[clap(short, long)]
        date: Option<String>,
    },

    /// Show aggregated insights over the whole log
    Insights,

    /// List the most recent entries in each collection
    Recent {
        /// Number of entries to show per collection
        #[clap(short, long, default_value_t = constants::DEFAULT_RECENT_LIMIT)]
        limit: usize,
    },
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}

/// Parses an optional `--date` argument into a `NaiveDate`.
///
/// Accepts YYYY-MM-DD or YYYYMMDD. An absent argument stays absent; the
/// tracker substitutes today's date.
pub fn parse_optional_date(date: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match date {
        None => Ok(None),
        Some(raw) => entries::parse_date(raw)
            .map(Some)
            .map_err(|e| AppError::Entry(format!("Invalid date format '{}': {}", raw, e))),
    }
}
