pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod repository;
pub mod scoreboard;
pub mod services;

pub use api::*;
pub use config::Config;
pub use error::{Result, ResultsError};
pub use models::*;
pub use services::DateService;

use std::sync::Arc;

/// Build a service over the live scoreboard endpoint, configured from the environment
pub fn live_service(config: &Config) -> Result<DateService> {
    let client = ScoreboardApiClient::new(&config.api)?;
    Ok(DateService::new(Arc::new(client)))
}

/// Fetch and normalize every game for one `YYYY-MM-DD` date
pub async fn fetch_games(date: &str) -> Result<Vec<Game>> {
    let config = Config::from_env()?;
    let results = live_service(&config)?.games_for_date(date).await?;
    Ok(results.games)
}

/// Fetch every game in the inclusive range `[start, end]` along with
/// the combined status counts
pub async fn fetch_games_range(start: &str, end: &str) -> Result<(Vec<Game>, GameSummary)> {
    let config = Config::from_env()?;
    let results = live_service(&config)?.games_for_range(start, end).await?;
    let summary = results.summary;
    Ok((results.into_games(), summary))
}
