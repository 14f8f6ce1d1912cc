use tracing::debug;

use super::rows::{HeaderRow, LineScoreRow};
use super::schema::{
    HeaderSchema, LineScoreSchema, GAME_HEADER, GAME_HEADER_COLUMNS, LINE_SCORE,
    LINE_SCORE_COLUMNS,
};
use super::wire::ScoreboardPayload;

/// The two row-sets the assembler needs, already typed
#[derive(Debug, Clone, Default)]
pub struct DecodedScoreboard {
    pub headers: Vec<HeaderRow>,
    pub line_scores: Vec<LineScoreRow>,
}

/// Locate GameHeader and LineScore in the payload.
///
/// A missing row-set yields no rows (an off-season day is valid), unknown
/// row-sets are ignored, and rows narrower than the schema are skipped
/// without affecting the rest of the batch.
pub fn decode(payload: &ScoreboardPayload) -> DecodedScoreboard {
    let headers = payload
        .result_set(GAME_HEADER)
        .map(|rs| {
            let schema = HeaderSchema::resolve(&GAME_HEADER_COLUMNS, &rs.headers);
            rs.row_set
                .iter()
                .enumerate()
                .filter(|(i, row)| keep_row(GAME_HEADER, *i, row.len(), schema.min_width()))
                .map(|(_, row)| HeaderRow::from_cells(&schema, row))
                .collect()
        })
        .unwrap_or_default();

    let line_scores = payload
        .result_set(LINE_SCORE)
        .map(|rs| {
            let schema = LineScoreSchema::resolve(&LINE_SCORE_COLUMNS, &rs.headers);
            rs.row_set
                .iter()
                .enumerate()
                .filter(|(i, row)| keep_row(LINE_SCORE, *i, row.len(), schema.min_width()))
                .map(|(_, row)| LineScoreRow::from_cells(&schema, row))
                .collect()
        })
        .unwrap_or_default();

    DecodedScoreboard {
        headers,
        line_scores,
    }
}

fn keep_row(table: &str, index: usize, width: usize, min_width: usize) -> bool {
    if width < min_width {
        debug!(table, index, width, min_width, "Skipping short row");
        return false;
    }
    true
}
