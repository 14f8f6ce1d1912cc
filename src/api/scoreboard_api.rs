use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::ApiConfig;
use crate::error::{Result, ResultsError};
use crate::scoreboard::ScoreboardPayload;

const LEAGUE_ID: &str = "00"; // NBA
const NBA_SITE: &str = "https://www.nba.com";

/// Anything that can produce one day's raw scoreboard payload
#[async_trait]
pub trait ScoreboardSource: Send + Sync {
    async fn fetch_scoreboard(&self, date: NaiveDate) -> Result<ScoreboardPayload>;
}

pub struct ScoreboardApiClient {
    client: Client,
    base_url: String,
}

impl ScoreboardApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        // The stats endpoint rejects requests that don't look like they
        // come from nba.com
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
        headers.insert(ORIGIN, HeaderValue::from_static(NBA_SITE));

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(ResultsError::Transport)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl ScoreboardSource for ScoreboardApiClient {
    /// Fetch the scoreboard for a single date
    #[instrument(skip(self), fields(url = %self.base_url))]
    async fn fetch_scoreboard(&self, date: NaiveDate) -> Result<ScoreboardPayload> {
        let game_date = date.format("%m/%d/%Y").to_string();

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("GameDate", game_date.as_str()),
                ("LeagueID", LEAGUE_ID),
                ("DayOffset", "0"),
            ])
            .send()
            .await
            .map_err(ResultsError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResultsError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(ResultsError::Transport)?;
        let payload: ScoreboardPayload =
            serde_json::from_str(&body).map_err(ResultsError::Decode)?;

        debug!(
            result_sets = payload.result_sets.len(),
            "Fetched scoreboard payload"
        );
        Ok(payload)
    }
}
