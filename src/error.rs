//! Error taxonomy for the scoreboard pipeline.
//!
//! Input validation failures are never retried and map to client errors;
//! transport failures abort the date (and any range containing it).
//! Row-level problems never show up here: short rows are skipped and
//! uncoercible cells become zero values.

use chrono::NaiveDate;
use thiserror::Error;

use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, ResultsError>;

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("invalid date format '{input}': use YYYY-MM-DD format")]
    InvalidDate { input: String },

    #[error("date cannot be in the future: {0}")]
    FutureDate(NaiveDate),

    #[error("date cannot be before NBA was founded ({founded}): {date}")]
    BeforeFounding { date: NaiveDate, founded: i32 },

    #[error("end date cannot be before start date ({start} > {end})")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("date range too large: maximum {max_days} days allowed, got {days}")]
    RangeTooLarge { days: i64, max_days: i64 },

    #[error("failed to reach scoreboard endpoint")]
    Transport(#[source] reqwest::Error),

    #[error("scoreboard request failed with status {status}")]
    Status { status: u16 },

    #[error("failed to decode scoreboard response")]
    Decode(#[source] serde_json::Error),

    #[error("failed to fetch games for date {date}")]
    ForDate {
        date: NaiveDate,
        #[source]
        source: Box<ResultsError>,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ResultsError {
    /// True for caller mistakes (bad dates, bad ranges), looking through
    /// per-date wrapping.
    pub fn is_validation(&self) -> bool {
        match self {
            ResultsError::InvalidDate { .. }
            | ResultsError::FutureDate(_)
            | ResultsError::BeforeFounding { .. }
            | ResultsError::EndBeforeStart { .. }
            | ResultsError::RangeTooLarge { .. } => true,
            ResultsError::ForDate { source, .. } => source.is_validation(),
            _ => false,
        }
    }
}
