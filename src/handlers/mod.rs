//! HTTP surface: a JSON API over the pipeline and the repository, plus an
//! HTML scoreboard page.

mod api;
mod pages;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::repository::GameRepository;
use crate::services::DateService;

#[derive(Clone)]
pub struct AppState {
    pub service: DateService,
    pub repository: Arc<dyn GameRepository>,
}

impl AppState {
    pub fn new(service: DateService, repository: Arc<dyn GameRepository>) -> Self {
        Self {
            service,
            repository,
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        // This will serve files from the "static" directory at the "/static" URL path
        .nest_service("/static", ServeDir::new("static"))
        .route("/", get(pages::scoreboard))
        .route("/api/health", get(api::health))
        .route("/api/games", get(api::games_for_date))
        .route("/api/games/range", get(api::games_for_range))
        .route("/api/games/live", get(api::live_games))
        .route("/api/games/:id", get(api::game_by_id))
        .route("/api/teams/:team/games", get(api::games_by_team))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
