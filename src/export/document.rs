use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::{Game, GameResults, GameSummary, RangeResults};

/// The JSON export format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub export_info: ExportInfo,
    pub games: Vec<Game>,
    pub summary: GameSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportInfo {
    pub generated_at: String,
    pub total_games: usize,
    pub date: String, // "YYYY-MM-DD" or "YYYY-MM-DD..YYYY-MM-DD" for ranges
}

impl ExportDocument {
    pub fn new(date: String, games: Vec<Game>) -> Self {
        let summary = GameSummary::from_games(&games);
        Self {
            export_info: ExportInfo {
                generated_at: Utc::now().to_rfc3339(),
                total_games: games.len(),
                date,
            },
            games,
            summary,
        }
    }
}

impl From<&GameResults> for ExportDocument {
    fn from(results: &GameResults) -> Self {
        Self::new(results.date.to_string(), results.games.clone())
    }
}

impl From<&RangeResults> for ExportDocument {
    fn from(results: &RangeResults) -> Self {
        Self::new(
            format!("{}..{}", results.start_date, results.end_date),
            results.games().cloned().collect(),
        )
    }
}

/// Save the export document as pretty-printed JSON
pub fn save_json(document: &ExportDocument, path: impl AsRef<Path>) -> Result<()> {
    let json =
        serde_json::to_string_pretty(document).context("Failed to serialize game export")?;
    std::fs::write(path.as_ref(), json)
        .with_context(|| format!("Failed to write {}", path.as_ref().display()))?;
    Ok(())
}

/// Load a previously written export document
pub fn load_json(path: impl AsRef<Path>) -> Result<ExportDocument> {
    let json = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
    let document: ExportDocument =
        serde_json::from_str(&json).context("Failed to deserialize game export")?;
    Ok(document)
}
