//! Column schemas for the row-sets the assembler needs.
//!
//! Each table is described once: a logical column, the header name the feed
//! uses for it, and the position it occupies when the feed omits headers.
//! Columns with no default position are optional and only exist when the
//! payload's header list names them.

pub const GAME_HEADER: &str = "GameHeader";
pub const LINE_SCORE: &str = "LineScore";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub header: &'static str,
    pub default_index: Option<usize>,
}

const fn required(header: &'static str, index: usize) -> ColumnDef {
    ColumnDef {
        header,
        default_index: Some(index),
    }
}

const fn optional(header: &'static str) -> ColumnDef {
    ColumnDef {
        header,
        default_index: None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderColumn {
    GameDate,
    GameId,
    GameStatusId,
    GameStatusText,
    HomeTeamId,
    VisitorTeamId,
    LivePeriod,
    LiveClock,
    HomeTeamName,
    VisitorTeamName,
    HomeTeamAbbreviation,
    VisitorTeamAbbreviation,
}

pub const GAME_HEADER_COLUMNS: [(HeaderColumn, ColumnDef); 12] = [
    (HeaderColumn::GameDate, required("GAME_DATE_EST", 0)),
    (HeaderColumn::GameId, required("GAME_ID", 2)),
    (HeaderColumn::GameStatusId, required("GAME_STATUS_ID", 3)),
    (HeaderColumn::GameStatusText, required("GAME_STATUS_TEXT", 4)),
    (HeaderColumn::HomeTeamId, required("HOME_TEAM_ID", 6)),
    (HeaderColumn::VisitorTeamId, required("VISITOR_TEAM_ID", 7)),
    (HeaderColumn::LivePeriod, required("LIVE_PERIOD", 9)),
    (HeaderColumn::LiveClock, required("LIVE_PC_TIME", 10)),
    (HeaderColumn::HomeTeamName, optional("HOME_TEAM_NAME")),
    (HeaderColumn::VisitorTeamName, optional("VISITOR_TEAM_NAME")),
    (HeaderColumn::HomeTeamAbbreviation, optional("HOME_TEAM_ABBREVIATION")),
    (HeaderColumn::VisitorTeamAbbreviation, optional("VISITOR_TEAM_ABBREVIATION")),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineScoreColumn {
    GameId,
    TeamId,
    TeamAbbreviation,
    TeamCityName,
    TeamName,
    Points,
}

pub const LINE_SCORE_COLUMNS: [(LineScoreColumn, ColumnDef); 6] = [
    (LineScoreColumn::GameId, required("GAME_ID", 2)),
    (LineScoreColumn::TeamId, required("TEAM_ID", 3)),
    (LineScoreColumn::TeamAbbreviation, required("TEAM_ABBREVIATION", 4)),
    (LineScoreColumn::TeamCityName, required("TEAM_CITY_NAME", 5)),
    (LineScoreColumn::TeamName, required("TEAM_NAME", 6)),
    (LineScoreColumn::Points, required("PTS", 22)),
];

/// Column positions for one table, resolved against a payload's headers
#[derive(Debug, Clone)]
pub struct ResolvedSchema<C> {
    positions: Vec<(C, Option<usize>)>,
    min_width: usize,
}

impl<C: Copy + PartialEq> ResolvedSchema<C> {
    /// With a header list, columns are located by name only and a column the
    /// headers don't name is absent. Without one, default positions apply.
    pub fn resolve(columns: &[(C, ColumnDef)], headers: &[String]) -> Self {
        let positions: Vec<(C, Option<usize>)> = columns
            .iter()
            .map(|(column, def)| {
                let idx = if headers.is_empty() {
                    def.default_index
                } else {
                    headers
                        .iter()
                        .position(|h| h.eq_ignore_ascii_case(def.header))
                };
                (*column, idx)
            })
            .collect();

        let min_width = columns
            .iter()
            .zip(&positions)
            .filter(|((_, def), _)| def.default_index.is_some())
            .filter_map(|(_, (_, idx))| *idx)
            .max()
            .map_or(0, |idx| idx + 1);

        Self {
            positions,
            min_width,
        }
    }

    pub fn index(&self, column: C) -> Option<usize> {
        self.positions
            .iter()
            .find(|(c, _)| *c == column)
            .and_then(|(_, idx)| *idx)
    }

    /// Rows narrower than this are skipped
    pub fn min_width(&self) -> usize {
        self.min_width
    }
}

pub type HeaderSchema = ResolvedSchema<HeaderColumn>;
pub type LineScoreSchema = ResolvedSchema<LineScoreColumn>;
