mod common;

use common::*;
use nba_results::models::{GameStatus, Winner};
use nba_results::scoreboard::{ResultSet, ScoreboardPayload};
use nba_results::{DateService, ResultsError};
use serde_json::json;
use std::sync::Arc;

fn service(source: FixtureSource) -> (DateService, Arc<FixtureSource>) {
    let source = Arc::new(source);
    (DateService::new(source.clone()), source)
}

#[tokio::test]
async fn test_final_game_away_win() {
    let (service, _) = service(FixtureSource::default().with(date("2024-01-15"), lakers_warriors()));

    let results = service.games_for_date("2024-01-15").await.unwrap();
    assert_eq!(results.total_games, 1);

    let game = &results.games[0];
    assert_eq!(game.game_id, "0022300567");
    assert_eq!(game.date, date("2024-01-15"));
    assert_eq!(game.status, GameStatus::Final);
    assert_eq!(game.home_team.short_code, "LAL");
    assert_eq!(game.home_team.display_name, "Los Angeles Lakers");
    assert_eq!(game.home_team.score, 108);
    assert_eq!(game.away_team.short_code, "GSW");
    assert_eq!(game.away_team.score, 112);
    assert_eq!(game.winner, Winner::Away);
    assert_eq!(results.summary.final_games, 1);
}

#[tokio::test]
async fn test_unstarted_game_is_scheduled() {
    let payload = payload(
        vec![header_row("2024-01-15", "0022300570", 1, "7:30 pm ET", LAL_ID, GSW_ID, 0, "")],
        Vec::new(),
    );
    let (service, _) = service(FixtureSource::default().with(date("2024-01-15"), payload));

    let results = service.games_for_date("2024-01-15").await.unwrap();
    let game = &results.games[0];
    assert_eq!(game.status, GameStatus::Scheduled);
    assert_eq!(game.winner, Winner::Undetermined);
    assert_eq!(game.home_team.score, 0);
    assert_eq!(game.away_team.score, 0);
}

#[tokio::test]
async fn test_tied_final_and_live_games() {
    let payload = payload(
        vec![
            header_row("2024-01-15", "0022300571", 3, "Final/OT", LAL_ID, GSW_ID, 5, ""),
            header_row("2024-01-15", "0022300572", 2, "Q3 5:12", 1610612738, 1610612752, 3, "5:12"),
        ],
        vec![
            line_score_row("0022300571", LAL_ID, "LAL", "Los Angeles", "Lakers", 120),
            line_score_row("0022300571", GSW_ID, "GSW", "Golden State", "Warriors", 120),
            line_score_row("0022300572", 1610612738, "BOS", "Boston", "Celtics", 70),
            line_score_row("0022300572", 1610612752, "NYK", "New York", "Knicks", 66),
        ],
    );
    let (service, _) = service(FixtureSource::default().with(date("2024-01-15"), payload));

    let results = service.games_for_date("2024-01-15").await.unwrap();
    assert_eq!(results.games[0].status, GameStatus::Final);
    assert_eq!(results.games[0].winner, Winner::Tie);
    assert_eq!(results.games[1].status, GameStatus::Live);
    assert_eq!(results.games[1].winner, Winner::Undetermined);
    assert_eq!(results.games[1].clock, "5:12");

    // Only final games ever carry a winner
    for game in &results.games {
        assert_eq!(game.winner != Winner::Undetermined, game.is_final());
    }
}

#[tokio::test]
async fn test_empty_day() {
    let (service, _) = service(FixtureSource::default());
    let results = service.games_for_date("2024-01-16").await.unwrap();
    assert!(results.games.is_empty());
    assert_eq!(results.summary.total(), 0);
}

#[tokio::test]
async fn test_range_aggregates_days() {
    let source = FixtureSource::default().with(date("2024-01-15"), lakers_warriors());
    let (service, source) = service(source);

    let results = service.games_for_range("2024-01-14", "2024-01-16").await.unwrap();
    assert_eq!(results.days.len(), 3);
    assert_eq!(results.total_games, 1);
    assert_eq!(results.summary.final_games, 1);
    assert_eq!(
        source.requested(),
        vec![date("2024-01-14"), date("2024-01-15"), date("2024-01-16")]
    );
}

#[tokio::test]
async fn test_range_end_before_start() {
    let (service, source) = service(FixtureSource::default());
    let err = service.games_for_range("2024-01-17", "2024-01-15").await.unwrap_err();
    assert!(matches!(err, ResultsError::EndBeforeStart { .. }));
    assert!(err.is_validation());
    assert!(source.requested().is_empty());
}

#[tokio::test]
async fn test_range_too_large() {
    let (service, source) = service(FixtureSource::default());
    let err = service.games_for_range("2024-01-01", "2024-02-15").await.unwrap_err();
    assert!(err.to_string().contains("maximum"));
    assert!(err.is_validation());
    assert!(source.requested().is_empty());
}

#[tokio::test]
async fn test_range_fails_on_first_bad_day() {
    let source = FixtureSource::default().failing_on(date("2024-01-15"));
    let (service, source) = service(source);

    let err = service.games_for_range("2024-01-14", "2024-01-16").await.unwrap_err();
    match err {
        ResultsError::ForDate { date: failed, .. } => assert_eq!(failed, date("2024-01-15")),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(source.requested(), vec![date("2024-01-14"), date("2024-01-15")]);
}

#[tokio::test]
async fn test_invalid_dates_rejected() {
    let (service, source) = service(FixtureSource::default());
    for input in ["2024/01/15", "2024-1-15", "not-a-date", "1945-12-31", "2999-01-01"] {
        let err = service.games_for_date(input).await.unwrap_err();
        assert!(err.is_validation(), "{input} should be rejected");
    }
    assert!(source.requested().is_empty());
}

/// The same Lakers/Warriors final, but laid out as
/// `["2024-01-15", "0022300567", "Final", "Regular Season", ...]` with a
/// headers array. Columns are found by name, so the default scoreboardV2
/// positions play no part.
#[tokio::test]
async fn test_named_headers_override_default_positions() {
    let game_header = ResultSet {
        name: "GameHeader".to_string(),
        headers: [
            "GAME_DATE_EST",
            "GAME_ID",
            "GAME_STATUS_TEXT",
            "SEASON_TYPE",
            "GAME_STATUS_ID",
            "HOME_TEAM_ID",
            "VISITOR_TEAM_ID",
            "LIVE_PERIOD",
            "LIVE_PC_TIME",
            "HOME_TEAM_ABBREVIATION",
            "VISITOR_TEAM_ABBREVIATION",
        ]
        .map(String::from)
        .to_vec(),
        row_set: vec![vec![
            json!("2024-01-15"),
            json!("0022300567"),
            json!("Final"),
            json!("Regular Season"),
            json!(3),
            json!(LAL_ID),
            json!(GSW_ID),
            json!(4),
            json!(""),
            json!("LAL"),
            json!("GSW"),
        ]],
    };
    let line_score = ResultSet {
        name: "LineScore".to_string(),
        headers: ["GAME_ID", "TEAM_ID", "TEAM_ABBREVIATION", "TEAM_CITY_NAME", "TEAM_NAME", "PTS"]
            .map(String::from)
            .to_vec(),
        row_set: vec![
            vec![json!("0022300567"), json!(LAL_ID), json!("LAL"), json!("Los Angeles"), json!("Lakers"), json!(108)],
            vec![json!("0022300567"), json!(GSW_ID), json!("GSW"), json!("Golden State"), json!("Warriors"), json!(112)],
        ],
    };
    let scoreboard = ScoreboardPayload {
        result_sets: vec![game_header, line_score],
        ..Default::default()
    };
    let (service, _) = service(FixtureSource::default().with(date("2024-01-15"), scoreboard));

    let results = service.games_for_date("2024-01-15").await.unwrap();
    assert_eq!(results.games.len(), 1);

    let game = &results.games[0];
    assert_eq!(game.game_id, "0022300567");
    assert_eq!(game.status, GameStatus::Final);
    assert_eq!(game.status_text, "Final");
    assert_eq!(game.home_team.short_code, "LAL");
    assert_eq!(game.home_team.score, 108);
    assert_eq!(game.away_team.short_code, "GSW");
    assert_eq!(game.away_team.score, 112);
    assert_eq!(game.winner, Winner::Away);
}
