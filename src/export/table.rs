use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::models::Game;

/// Column headers shared by the CSV file and the games worksheet
pub const GAME_COLUMNS: [&str; 10] = [
    "Game ID",
    "Date",
    "Home Team",
    "Home Score",
    "Away Team",
    "Away Score",
    "Period",
    "Clock",
    "Status",
    "Winner",
];

/// One flat row per game
#[derive(Debug, Clone, Serialize)]
pub struct GameRow {
    #[serde(rename = "Game ID")]
    pub game_id: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Home Team")]
    pub home_team: String,
    #[serde(rename = "Home Score")]
    pub home_score: u32,
    #[serde(rename = "Away Team")]
    pub away_team: String,
    #[serde(rename = "Away Score")]
    pub away_score: u32,
    #[serde(rename = "Period")]
    pub period: u32,
    #[serde(rename = "Clock")]
    pub clock: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Winner")]
    pub winner: String,
}

impl From<&Game> for GameRow {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.game_id.clone(),
            date: game.date.to_string(),
            home_team: team_label(&game.home_team.short_code, &game.home_team.display_name),
            home_score: game.home_team.score,
            away_team: team_label(&game.away_team.short_code, &game.away_team.display_name),
            away_score: game.away_team.score,
            period: game.period,
            clock: game.clock.clone(),
            status: game.status.to_string(),
            winner: game.winner.to_string(),
        }
    }
}

fn team_label(short_code: &str, display_name: &str) -> String {
    if short_code.is_empty() {
        display_name.to_string()
    } else {
        short_code.to_string()
    }
}

/// Save games to CSV
pub fn save_csv(games: &[Game], path: impl AsRef<Path>) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())
        .with_context(|| format!("Failed to create CSV file {}", path.as_ref().display()))?;

    if games.is_empty() {
        // Serializing rows writes the header; with no rows write it by hand
        writer.write_record(GAME_COLUMNS)?;
    }
    for game in games {
        writer
            .serialize(GameRow::from(game))
            .context("Failed to write CSV row")?;
    }
    writer.flush().context("Failed to flush CSV file")?;
    Ok(())
}
