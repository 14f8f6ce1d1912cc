use chrono::NaiveDate;
use serde_json::Value;

use super::cells::{as_count, as_i64, as_string, cell};
use super::schema::{HeaderColumn, HeaderSchema, LineScoreColumn, LineScoreSchema};

/// Typed view of one GameHeader row
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderRow {
    pub game_date: Option<NaiveDate>,
    pub game_id: String,
    pub status_id: i64,
    pub status_text: String,
    pub home_team_id: String,
    pub visitor_team_id: String,
    pub period: u32,
    pub clock: String,
    pub home_team_name: String,
    pub visitor_team_name: String,
    pub home_team_abbreviation: String,
    pub visitor_team_abbreviation: String,
}

impl HeaderRow {
    pub fn from_cells(schema: &HeaderSchema, row: &[Value]) -> Self {
        let text = |column: HeaderColumn| as_string(cell(row, schema.index(column))).trim().to_string();

        Self {
            game_date: parse_game_date(&text(HeaderColumn::GameDate)),
            game_id: text(HeaderColumn::GameId),
            status_id: as_i64(cell(row, schema.index(HeaderColumn::GameStatusId))),
            status_text: text(HeaderColumn::GameStatusText),
            home_team_id: text(HeaderColumn::HomeTeamId),
            visitor_team_id: text(HeaderColumn::VisitorTeamId),
            period: as_count(cell(row, schema.index(HeaderColumn::LivePeriod))),
            clock: text(HeaderColumn::LiveClock),
            home_team_name: text(HeaderColumn::HomeTeamName),
            visitor_team_name: text(HeaderColumn::VisitorTeamName),
            home_team_abbreviation: text(HeaderColumn::HomeTeamAbbreviation),
            visitor_team_abbreviation: text(HeaderColumn::VisitorTeamAbbreviation),
        }
    }

    /// Activation flag derived from the numeric status id:
    /// 1 (not started) and 2 (in progress) are active, 3 (final) is not.
    pub fn is_active(&self) -> Option<bool> {
        match self.status_id {
            1 | 2 => Some(true),
            3 => Some(false),
            _ => None,
        }
    }
}

/// Typed view of one LineScore row
#[derive(Debug, Clone, PartialEq)]
pub struct LineScoreRow {
    pub game_id: String,
    pub team_id: String,
    pub abbreviation: String,
    pub city: String,
    pub name: String,
    pub points: u32,
}

impl LineScoreRow {
    pub fn from_cells(schema: &LineScoreSchema, row: &[Value]) -> Self {
        let text = |column: LineScoreColumn| as_string(cell(row, schema.index(column))).trim().to_string();

        Self {
            game_id: text(LineScoreColumn::GameId),
            team_id: text(LineScoreColumn::TeamId),
            abbreviation: text(LineScoreColumn::TeamAbbreviation),
            city: text(LineScoreColumn::TeamCityName),
            name: text(LineScoreColumn::TeamName),
            points: as_count(cell(row, schema.index(LineScoreColumn::Points))),
        }
    }

    /// City and nickname joined, e.g. "Golden State Warriors"
    pub fn display_name(&self) -> String {
        match (self.city.is_empty(), self.name.is_empty()) {
            (false, false) => format!("{} {}", self.city, self.name),
            (false, true) => self.city.clone(),
            _ => self.name.clone(),
        }
    }

    /// Name-based fallback match for feeds without team identifiers
    pub fn matches_name(&self, key: &str) -> bool {
        !key.is_empty()
            && (self.abbreviation == key || self.name == key || self.display_name() == key)
    }
}

/// GAME_DATE_EST looks like "2024-01-15T00:00:00"; only the date part matters
fn parse_game_date(raw: &str) -> Option<NaiveDate> {
    raw.get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}
