use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::error::Error as _;
use tracing::{error, warn};

use super::AppState;
use crate::error::ResultsError;
use crate::repository::RepositoryError;
use crate::services::date_service::DATE_FORMAT;

const DEFAULT_GAMES_LIMIT: usize = 50;
const MAX_GAMES_LIMIT: usize = 100;
const DEFAULT_TEAM_LIMIT: usize = 20;
const MAX_TEAM_LIMIT: usize = 50;

/// JSON error body: `{error, status, timestamp}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.message,
            "status": self.status.as_u16(),
            "timestamp": Utc::now(),
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ResultsError> for ApiError {
    fn from(err: ResultsError) -> Self {
        let status = if err.is_validation() {
            StatusCode::BAD_REQUEST
        } else if matches!(err, ResultsError::Repository(_)) {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::BAD_GATEWAY
        };
        let message = describe(&err);
        if status == StatusCode::BAD_REQUEST {
            warn!(%message, "Rejected request");
        } else {
            error!(%message, "Request failed");
        }
        ApiError::new(status, message)
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        ResultsError::from(err).into()
    }
}

/// Error message including its sources, e.g.
/// "failed to fetch games for date 2024-01-15: scoreboard request failed with status 503"
fn describe(err: &ResultsError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn parse_limit(raw: Option<&str>, default: usize, max: usize) -> Result<usize, ApiError> {
    match raw {
        None => Ok(default),
        Some(raw) => match raw.parse::<usize>() {
            Ok(limit) if (1..=max).contains(&limit) => Ok(limit),
            _ => Err(ApiError::new(
                StatusCode::BAD_REQUEST,
                format!("Invalid limit. Must be between 1 and {}", max),
            )),
        },
    }
}

#[derive(Debug, Deserialize)]
pub struct GamesQuery {
    date: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    start: Option<String>,
    end: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    limit: Option<String>,
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/games?date=YYYY-MM-DD&limit=N
pub async fn games_for_date(
    State(state): State<AppState>,
    Query(query): Query<GamesQuery>,
) -> Result<Response, ApiError> {
    let limit = parse_limit(query.limit.as_deref(), DEFAULT_GAMES_LIMIT, MAX_GAMES_LIMIT)?;
    let date = query
        .date
        .unwrap_or_else(|| Utc::now().date_naive().format(DATE_FORMAT).to_string());

    let mut results = state.service.games_for_date(&date).await?;
    state.repository.save_games(&results.games)?;
    results.games.truncate(limit);

    Ok(Json(results).into_response())
}

/// GET /api/games/range?start=YYYY-MM-DD&end=YYYY-MM-DD
pub async fn games_for_range(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Response, ApiError> {
    let (Some(start), Some(end)) = (query.start, query.end) else {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "Both start and end dates are required",
        ));
    };

    let results = state.service.games_for_range(&start, &end).await?;
    for day in &results.days {
        state.repository.save_games(&day.games)?;
    }

    Ok(Json(results).into_response())
}

/// GET /api/games/live
pub async fn live_games(State(state): State<AppState>) -> Result<Response, ApiError> {
    let games = state.repository.live_games()?;
    Ok(Json(games).into_response())
}

/// GET /api/games/:id
pub async fn game_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    match state.repository.game_by_id(&id)? {
        Some(game) => Ok(Json(game).into_response()),
        None => Err(ApiError::new(StatusCode::NOT_FOUND, "Game not found")),
    }
}

/// GET /api/teams/:team/games?limit=N
pub async fn games_by_team(
    State(state): State<AppState>,
    Path(team): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Result<Response, ApiError> {
    // Out-of-range limits fall back to the default rather than failing
    let limit = query
        .limit
        .as_deref()
        .and_then(|raw| raw.parse::<usize>().ok())
        .filter(|limit| *limit > 0)
        .map_or(DEFAULT_TEAM_LIMIT, |limit| limit.min(MAX_TEAM_LIMIT));

    let games = state.repository.games_by_team(&team, limit)?;
    Ok(Json(games).into_response())
}
