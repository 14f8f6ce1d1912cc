use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::warn;

use super::decoder::DecodedScoreboard;
use super::rows::{HeaderRow, LineScoreRow};
use super::status::{resolve_status, resolve_winner};
use crate::models::{Game, Team};

/// Join header rows with line scores by game id, producing one game per
/// distinct header game id.
///
/// Scores attach by team identifier. Name matching is only a fallback for
/// feeds that omit identifiers, and two teams sharing a display name would
/// be mis-joined there. A team with no line score keeps a zero score
/// (games that have not started have no line scores yet).
///
/// When several header rows share a game id the last one wins, keeping the
/// position of the first.
pub fn assemble(decoded: &DecodedScoreboard, requested_date: NaiveDate) -> Vec<Game> {
    let mut by_game: HashMap<&str, Vec<&LineScoreRow>> = HashMap::new();
    for line in &decoded.line_scores {
        by_game.entry(line.game_id.as_str()).or_default().push(line);
    }

    let mut games: Vec<Game> = Vec::with_capacity(decoded.headers.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for header in &decoded.headers {
        let lines = by_game
            .get(header.game_id.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default();
        let game = build_game(header, lines, requested_date);

        match positions.get(&game.game_id) {
            Some(&idx) => {
                warn!(game_id = %game.game_id, "Duplicate game id in header rows, keeping last");
                games[idx] = game;
            }
            None => {
                positions.insert(game.game_id.clone(), games.len());
                games.push(game);
            }
        }
    }

    games
}

fn build_game(header: &HeaderRow, lines: &[&LineScoreRow], requested_date: NaiveDate) -> Game {
    let mut home_team = skeleton_team(&header.home_team_id, &header.home_team_abbreviation);
    let mut away_team = skeleton_team(&header.visitor_team_id, &header.visitor_team_abbreviation);

    let home_key = name_key(&header.home_team_name, &header.home_team_abbreviation);
    let away_key = name_key(&header.visitor_team_name, &header.visitor_team_abbreviation);

    for line in lines {
        if matches_team(&home_team, home_key, line) {
            attach(&mut home_team, line);
        } else if matches_team(&away_team, away_key, line) {
            attach(&mut away_team, line);
        }
    }

    if home_team.display_name.is_empty() {
        home_team.display_name = header.home_team_name.clone();
    }
    if away_team.display_name.is_empty() {
        away_team.display_name = header.visitor_team_name.clone();
    }

    let status = resolve_status(&header.status_text, header.period, header.is_active());
    let winner = resolve_winner(status, &home_team, &away_team);

    Game {
        game_id: header.game_id.clone(),
        date: header.game_date.unwrap_or(requested_date),
        home_team,
        away_team,
        period: header.period,
        clock: header.clock.clone(),
        status,
        status_text: header.status_text.clone(),
        winner,
    }
}

fn skeleton_team(team_id: &str, abbreviation: &str) -> Team {
    let mut team = Team::with_id(team_id.to_string());
    team.short_code = abbreviation.to_string();
    team
}

fn name_key<'a>(name: &'a str, abbreviation: &'a str) -> &'a str {
    if name.is_empty() {
        abbreviation
    } else {
        name
    }
}

fn matches_team(team: &Team, name_key: &str, line: &LineScoreRow) -> bool {
    if team.has_identifier() && !line.team_id.is_empty() {
        return team.team_id == line.team_id;
    }
    line.matches_name(name_key)
}

fn attach(team: &mut Team, line: &LineScoreRow) {
    team.score = line.points;
    if !team.has_identifier() {
        team.team_id = line.team_id.clone();
    }
    if !line.abbreviation.is_empty() {
        team.short_code = line.abbreviation.clone();
    }
    let display_name = line.display_name();
    if !display_name.is_empty() {
        team.display_name = display_name;
    }
}
