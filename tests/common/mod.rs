#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use nba_results::api::ScoreboardSource;
use nba_results::error::{Result, ResultsError};
use nba_results::scoreboard::{ResultSet, ScoreboardPayload};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

pub const LAL_ID: i64 = 1610612747;
pub const GSW_ID: i64 = 1610612744;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// A GameHeader row laid out at the default column positions
pub fn header_row(
    game_date: &str,
    game_id: &str,
    status_id: i64,
    status_text: &str,
    home_id: i64,
    visitor_id: i64,
    period: i64,
    clock: &str,
) -> Vec<Value> {
    vec![
        json!(format!("{}T00:00:00", game_date)),
        json!(1),
        json!(game_id),
        json!(status_id),
        json!(status_text),
        json!(format!("20240115/{}", game_id)),
        json!(home_id),
        json!(visitor_id),
        json!("2023"),
        json!(period),
        json!(clock),
    ]
}

/// A LineScore row with points in the last (23rd) column
pub fn line_score_row(game_id: &str, team_id: i64, abbr: &str, city: &str, name: &str, pts: i64) -> Vec<Value> {
    let mut row = vec![
        json!(game_id),
        json!(1),
        json!(game_id),
        json!(team_id),
        json!(abbr),
        json!(city),
        json!(name),
    ];
    row.resize(22, Value::Null);
    row.push(json!(pts));
    row
}

pub fn payload(headers: Vec<Vec<Value>>, line_scores: Vec<Vec<Value>>) -> ScoreboardPayload {
    ScoreboardPayload {
        resource: "scoreboardV2".to_string(),
        parameters: json!({}),
        result_sets: vec![
            ResultSet {
                name: "GameHeader".to_string(),
                headers: Vec::new(),
                row_set: headers,
            },
            ResultSet {
                name: "LineScore".to_string(),
                headers: Vec::new(),
                row_set: line_scores,
            },
        ],
    }
}

/// Lakers (home) 108, Warriors (away) 112, final
pub fn lakers_warriors() -> ScoreboardPayload {
    payload(
        vec![header_row("2024-01-15", "0022300567", 3, "Final", LAL_ID, GSW_ID, 4, "")],
        vec![
            line_score_row("0022300567", LAL_ID, "LAL", "Los Angeles", "Lakers", 108),
            line_score_row("0022300567", GSW_ID, "GSW", "Golden State", "Warriors", 112),
        ],
    )
}

/// Serves canned payloads per date; unknown dates get an empty scoreboard
#[derive(Default)]
pub struct FixtureSource {
    payloads: HashMap<NaiveDate, ScoreboardPayload>,
    failing: Option<NaiveDate>,
    pub requested: Mutex<Vec<NaiveDate>>,
}

impl FixtureSource {
    pub fn with(mut self, date: NaiveDate, payload: ScoreboardPayload) -> Self {
        self.payloads.insert(date, payload);
        self
    }

    pub fn failing_on(mut self, date: NaiveDate) -> Self {
        self.failing = Some(date);
        self
    }

    pub fn requested(&self) -> Vec<NaiveDate> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScoreboardSource for FixtureSource {
    async fn fetch_scoreboard(&self, date: NaiveDate) -> Result<ScoreboardPayload> {
        self.requested.lock().unwrap().push(date);
        if self.failing == Some(date) {
            return Err(ResultsError::Status { status: 503 });
        }
        Ok(self.payloads.get(&date).cloned().unwrap_or_default())
    }
}
