use chrono::{Datelike, NaiveDate, Utc};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::api::ScoreboardSource;
use crate::error::{Result, ResultsError};
use crate::models::{GameResults, RangeResults};
use crate::scoreboard;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Earliest season the league has results for
pub const NBA_FOUNDED_YEAR: i32 = 1946;

/// Longest allowed distance between range start and end, in days
pub const MAX_RANGE_DAYS: i64 = 30;

/// Drives fetch + normalize for single dates and inclusive date ranges.
///
/// Holds no mutable state, so one instance can serve concurrent callers;
/// every call builds its games from scratch.
#[derive(Clone)]
pub struct DateService {
    source: Arc<dyn ScoreboardSource>,
}

impl DateService {
    pub fn new(source: Arc<dyn ScoreboardSource>) -> Self {
        Self { source }
    }

    /// Games for one `YYYY-MM-DD` date
    pub async fn games_for_date(&self, date_str: &str) -> Result<GameResults> {
        let date = parse_date(date_str)?;
        validate_date(date, today())?;
        self.fetch_day(date).await
    }

    /// Games for every day in `[start, end]`. Any failing day fails the
    /// whole range; there is no partial result.
    pub async fn games_for_range(&self, start_str: &str, end_str: &str) -> Result<RangeResults> {
        let start = parse_date(start_str)?;
        let end = parse_date(end_str)?;
        validate_range(start, end, today())?;

        let mut days = Vec::new();
        for date in start.iter_days().take_while(|d| *d <= end) {
            let day = self
                .fetch_day(date)
                .await
                .map_err(|e| ResultsError::ForDate {
                    date,
                    source: Box::new(e),
                })?;
            days.push(day);
        }

        let results = RangeResults::new(start, end, days);
        info!(
            %start,
            %end,
            total_games = results.total_games,
            "Fetched games for date range"
        );
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn fetch_day(&self, date: NaiveDate) -> Result<GameResults> {
        let payload = self.source.fetch_scoreboard(date).await?;
        let games = scoreboard::normalize(&payload, date);
        info!(games = games.len(), "Normalized scoreboard");
        Ok(GameResults::new(date, games))
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Strict `YYYY-MM-DD`: zero padding is required
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let invalid = || ResultsError::InvalidDate {
        input: input.to_string(),
    };
    if input.len() != 10 {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}

pub fn validate_date(date: NaiveDate, today: NaiveDate) -> Result<()> {
    if date > today {
        return Err(ResultsError::FutureDate(date));
    }
    if date.year() < NBA_FOUNDED_YEAR {
        return Err(ResultsError::BeforeFounding {
            date,
            founded: NBA_FOUNDED_YEAR,
        });
    }
    Ok(())
}

/// Both endpoints are checked up front so a bad range costs no fetches
pub fn validate_range(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Result<()> {
    if end < start {
        return Err(ResultsError::EndBeforeStart { start, end });
    }
    let days = (end - start).num_days();
    if days > MAX_RANGE_DAYS {
        return Err(ResultsError::RangeTooLarge {
            days,
            max_days: MAX_RANGE_DAYS,
        });
    }
    validate_date(start, today)?;
    validate_date(end, today)
}
