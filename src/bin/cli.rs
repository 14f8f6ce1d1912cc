use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use nba_results::export::{save_csv, save_json, save_workbook, ExportDocument};
use nba_results::services::date_service::DATE_FORMAT;
use nba_results::{logging, Config, Game, GameSummary};
use std::path::PathBuf;

/// Fetch NBA results for a date or a date range
#[derive(Debug, Parser)]
#[command(name = "nba-results", version, about)]
struct Args {
    /// Date to fetch (YYYY-MM-DD), defaults to today
    #[arg(short, long, conflicts_with_all = ["start", "end"])]
    date: Option<String>,

    /// First date of a range (YYYY-MM-DD)
    #[arg(long, requires = "end")]
    start: Option<String>,

    /// Last date of a range (YYYY-MM-DD), inclusive
    #[arg(long, requires = "start")]
    end: Option<String>,

    /// Write the results as a JSON document
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Write one CSV row per game
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Write an XLSX workbook
    #[arg(long, value_name = "PATH")]
    excel: Option<PathBuf>,

    /// Only print the summary
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    logging::init(&config.log);

    let service = nba_results::live_service(&config)?;

    let document = match (&args.start, &args.end) {
        (Some(start), Some(end)) => {
            println!("NBA games from {} to {}\n", start, end);
            let results = service.games_for_range(start, end).await?;
            ExportDocument::from(&results)
        }
        (None, None) => {
            let date = args
                .date
                .clone()
                .unwrap_or_else(|| Utc::now().date_naive().format(DATE_FORMAT).to_string());
            println!("NBA games for {}\n", date);
            let results = service.games_for_date(&date).await?;
            ExportDocument::from(&results)
        }
        _ => bail!("--start and --end must be given together"),
    };

    if !args.quiet {
        print_games(&document.games);
    }
    print_summary(&document.summary);

    if let Some(path) = &args.json {
        save_json(&document, path)?;
        println!("\nSaved JSON to {}", path.display());
    }
    if let Some(path) = &args.csv {
        save_csv(&document.games, path)?;
        println!("\nSaved CSV to {}", path.display());
    }
    if let Some(path) = &args.excel {
        save_workbook(&document, path)?;
        println!("\nSaved workbook to {}", path.display());
    }

    Ok(())
}

fn print_games(games: &[Game]) {
    if games.is_empty() {
        println!("No games found.");
        return;
    }
    for (i, game) in games.iter().enumerate() {
        println!("{}. [{}] {}", i + 1, game.date, game.format());
    }
}

fn print_summary(summary: &GameSummary) {
    println!(
        "\nTotal: {} | Scheduled: {} | Live: {} | Final: {}",
        summary.total(),
        summary.scheduled,
        summary.live,
        summary.final_games
    );
}
