//! Storage for games the server has already fetched.
//!
//! Lives only as long as the process. The pipeline never reads from here;
//! it produces fresh games per call and the HTTP layer records them.

mod error;
mod memory;

pub use error::RepositoryError;
pub use memory::InMemoryGameRepository;

use crate::models::Game;

pub type Result<T> = std::result::Result<T, RepositoryError>;

pub trait GameRepository: Send + Sync {
    /// Insert or replace games by id. Games without an id are skipped.
    /// Returns how many were stored.
    fn save_games(&self, games: &[Game]) -> Result<usize>;

    fn game_by_id(&self, game_id: &str) -> Result<Option<Game>>;

    /// Games, newest first, where either side matches a team id or short code
    fn games_by_team(&self, team: &str, limit: usize) -> Result<Vec<Game>>;

    fn live_games(&self) -> Result<Vec<Game>>;
}
