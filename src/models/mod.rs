use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scoreboard::status::{is_overtime, REGULATION_PERIODS};

/// A team as it appears inside a game. Not a standalone aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: String,
    pub display_name: String,
    pub short_code: String, // Three-letter abbreviation (e.g., LAL, GSW)
    pub score: u32,
}

impl Team {
    /// Build a team from whatever identifying text the header row carries
    pub fn with_id(team_id: String) -> Self {
        Self {
            team_id,
            ..Default::default()
        }
    }

    pub fn has_identifier(&self) -> bool {
        !self.team_id.is_empty() && self.team_id != "0"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Scheduled,
    Live,
    Final,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Scheduled => "Scheduled",
            GameStatus::Live => "Live",
            GameStatus::Final => "Final",
        }
    }

    /// Lowercase name used for CSS classes on the scoreboard page
    pub fn css_class(&self) -> &'static str {
        match self {
            GameStatus::Scheduled => "scheduled",
            GameStatus::Live => "live",
            GameStatus::Final => "final",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Winner of a completed game. `Undetermined` serializes as an empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Home,
    Away,
    Tie,
    #[default]
    #[serde(rename = "")]
    Undetermined,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::Home => "Home",
            Winner::Away => "Away",
            Winner::Tie => "Tie",
            Winner::Undetermined => "",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled, live, or completed matchup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub game_id: String,
    pub date: NaiveDate,
    pub home_team: Team,
    pub away_team: Team,
    pub period: u32, // 0 = not started
    pub clock: String,
    pub status: GameStatus,
    pub status_text: String,
    pub winner: Winner,
}

impl Game {
    pub fn is_final(&self) -> bool {
        self.status == GameStatus::Final
    }

    /// Whether either side matches a team identifier or short code
    pub fn involves_team(&self, team: &str) -> bool {
        [&self.home_team, &self.away_team].iter().any(|t| {
            (t.has_identifier() && t.team_id == team) || t.short_code.eq_ignore_ascii_case(team)
        })
    }

    /// "Q3" in regulation, "OT1", "OT2", ... afterwards
    pub fn period_label(&self) -> String {
        if is_overtime(self.period) {
            format!("OT{}", self.period - REGULATION_PERIODS)
        } else {
            format!("Q{}", self.period)
        }
    }

    pub fn format(&self) -> String {
        let away = label(&self.away_team);
        let home = label(&self.home_team);
        let mut line = format!(
            "{} @ {} | {} - {} | {}",
            away, home, self.away_team.score, self.home_team.score, self.status
        );
        match self.status {
            GameStatus::Live => {
                line.push_str(&format!(" ({} {})", self.period_label(), self.clock));
            }
            GameStatus::Final => {
                line.push_str(&format!(" | Winner: {}", self.winner));
            }
            GameStatus::Scheduled => {
                if !self.status_text.is_empty() {
                    line.push_str(&format!(" ({})", self.status_text));
                }
            }
        }
        line
    }
}

fn label(team: &Team) -> &str {
    if !team.short_code.is_empty() {
        &team.short_code
    } else if !team.display_name.is_empty() {
        &team.display_name
    } else {
        &team.team_id
    }
}

/// Counts of games by derived status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub scheduled: usize,
    pub live: usize,
    #[serde(rename = "final")]
    pub final_games: usize,
}

impl GameSummary {
    pub fn from_games<'a>(games: impl IntoIterator<Item = &'a Game>) -> Self {
        let mut summary = GameSummary::default();
        for game in games {
            summary.record(game.status);
        }
        summary
    }

    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Scheduled => self.scheduled += 1,
            GameStatus::Live => self.live += 1,
            GameStatus::Final => self.final_games += 1,
        }
    }

    pub fn merge(&mut self, other: &GameSummary) {
        self.scheduled += other.scheduled;
        self.live += other.live;
        self.final_games += other.final_games;
    }

    pub fn total(&self) -> usize {
        self.scheduled + self.live + self.final_games
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMetadata {
    pub generated_at: String, // RFC 3339
    pub source: String,
    pub version: String,
}

impl ResultMetadata {
    pub fn now() -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            source: "NBA Stats API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Games for a single date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResults {
    pub date: NaiveDate,
    pub games: Vec<Game>,
    pub total_games: usize,
    pub summary: GameSummary,
    pub metadata: ResultMetadata,
}

impl GameResults {
    pub fn new(date: NaiveDate, games: Vec<Game>) -> Self {
        let summary = GameSummary::from_games(&games);
        Self {
            date,
            total_games: games.len(),
            games,
            summary,
            metadata: ResultMetadata::now(),
        }
    }
}

/// Games for an inclusive date range, one entry per day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeResults {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: Vec<GameResults>,
    pub total_games: usize,
    pub summary: GameSummary,
    pub metadata: ResultMetadata,
}

impl RangeResults {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, days: Vec<GameResults>) -> Self {
        let mut summary = GameSummary::default();
        for day in &days {
            summary.merge(&day.summary);
        }
        Self {
            start_date,
            end_date,
            total_games: days.iter().map(|d| d.total_games).sum(),
            days,
            summary,
            metadata: ResultMetadata::now(),
        }
    }

    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.days.iter().flat_map(|d| d.games.iter())
    }

    pub fn into_games(self) -> Vec<Game> {
        self.days.into_iter().flat_map(|d| d.games).collect()
    }
}
