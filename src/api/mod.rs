pub mod scoreboard_api;

pub use scoreboard_api::{ScoreboardApiClient, ScoreboardSource};
