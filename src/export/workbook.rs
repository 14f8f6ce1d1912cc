use anyhow::{Context, Result};
use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use std::path::Path;

use super::document::ExportDocument;
use super::table::{GameRow, GAME_COLUMNS};
use crate::models::GameStatus;

const GAMES_SHEET: &str = "NBA Games";
const SUMMARY_SHEET: &str = "Summary";

/// Save the export as a workbook: one row per game plus a summary sheet.
/// Row colours follow game status and are purely cosmetic.
pub fn save_workbook(document: &ExportDocument, path: impl AsRef<Path>) -> Result<()> {
    let mut workbook = build_workbook(document)?;
    workbook
        .save(path.as_ref())
        .with_context(|| format!("Failed to save workbook {}", path.as_ref().display()))?;
    Ok(())
}

pub fn build_workbook(document: &ExportDocument) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    workbook.push_worksheet(games_sheet(document).context("Failed to build games sheet")?);
    workbook.push_worksheet(summary_sheet(document).context("Failed to build summary sheet")?);
    Ok(workbook)
}

fn status_format(status: GameStatus) -> Format {
    let fill = match status {
        GameStatus::Final => 0xD4EDDA,
        GameStatus::Live => 0xFFF3CD,
        GameStatus::Scheduled => 0xF8F9FA,
    };
    Format::new()
        .set_background_color(Color::RGB(fill))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xCCCCCC))
        .set_align(FormatAlign::Center)
}

fn games_sheet(document: &ExportDocument) -> Result<Worksheet, XlsxError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(GAMES_SHEET)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_size(12)
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x366092))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    for (col, title) in GAME_COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        sheet.set_column_width(col as u16, 15)?;
    }

    for (i, game) in document.games.iter().enumerate() {
        let row = (i + 1) as u32;
        let format = status_format(game.status);
        let record = GameRow::from(game);

        sheet.write_string_with_format(row, 0, &record.game_id, &format)?;
        sheet.write_string_with_format(row, 1, &record.date, &format)?;
        sheet.write_string_with_format(row, 2, &record.home_team, &format)?;
        sheet.write_number_with_format(row, 3, record.home_score, &format)?;
        sheet.write_string_with_format(row, 4, &record.away_team, &format)?;
        sheet.write_number_with_format(row, 5, record.away_score, &format)?;
        sheet.write_number_with_format(row, 6, record.period, &format)?;
        sheet.write_string_with_format(row, 7, &record.clock, &format)?;
        sheet.write_string_with_format(row, 8, &record.status, &format)?;
        sheet.write_string_with_format(row, 9, &record.winner, &format)?;
    }

    Ok(sheet)
}

fn summary_sheet(document: &ExportDocument) -> Result<Worksheet, XlsxError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(SUMMARY_SHEET)?;

    let title_format = Format::new().set_bold().set_font_size(16);
    sheet.write_string_with_format(0, 0, "NBA Games Summary", &title_format)?;

    let generated = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let summary = &document.summary;
    let rows: [(&str, Option<&str>, Option<usize>); 7] = [
        ("Generated", Some(generated.as_str()), None),
        ("Date", Some(document.export_info.date.as_str()), None),
        ("Total Games", None, Some(document.export_info.total_games)),
        ("Status Breakdown", None, None),
        ("Scheduled", None, Some(summary.scheduled)),
        ("Live", None, Some(summary.live)),
        ("Final", None, Some(summary.final_games)),
    ];

    for (i, (label, text, count)) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, *label)?;
        if let Some(text) = text {
            sheet.write_string(row, 1, *text)?;
        }
        if let Some(count) = count {
            sheet.write_number(row, 1, *count as f64)?;
        }
    }

    sheet.set_column_width(0, 20)?;
    sheet.set_column_width(1, 22)?;
    Ok(sheet)
}
