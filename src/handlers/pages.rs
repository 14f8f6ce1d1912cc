use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::warn;

use super::AppState;
use crate::models::{Game, GameSummary};
use crate::services::date_service::DATE_FORMAT;

#[derive(Template)]
#[template(path = "index.html")]
struct ScoreboardTemplate {
    date: String,
    games: Vec<Game>,
    summary: GameSummary,
    error: Option<String>,
}

struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {}", err),
            )
                .into_response(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    date: Option<String>,
}

/// GET /?date=YYYY-MM-DD
pub async fn scoreboard(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let date = query
        .date
        .unwrap_or_else(|| Utc::now().date_naive().format(DATE_FORMAT).to_string());

    let template = match state.service.games_for_date(&date).await {
        Ok(results) => {
            if let Err(err) = state.repository.save_games(&results.games) {
                warn!(error = %err, "Failed to store games");
            }
            ScoreboardTemplate {
                date,
                games: results.games,
                summary: results.summary,
                error: None,
            }
        }
        Err(err) => ScoreboardTemplate {
            date,
            games: Vec::new(),
            summary: GameSummary::default(),
            error: Some(err.to_string()),
        },
    };

    HtmlTemplate(template)
}
