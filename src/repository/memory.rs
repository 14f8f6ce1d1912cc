use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

use super::{GameRepository, RepositoryError, Result};
use crate::models::{Game, GameStatus};

/// In-memory implementation of GameRepository
#[derive(Default)]
pub struct InMemoryGameRepository {
    games: RwLock<HashMap<String, Game>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn select<F>(&self, limit: usize, filter: F) -> Result<Vec<Game>>
    where
        F: Fn(&Game) -> bool,
    {
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut selected: Vec<Game> = games.values().filter(|g| filter(g)).cloned().collect();
        selected.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.game_id.cmp(&b.game_id)));
        selected.truncate(limit);
        Ok(selected)
    }
}

impl GameRepository for InMemoryGameRepository {
    fn save_games(&self, games: &[Game]) -> Result<usize> {
        let mut stored = self
            .games
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut saved = 0;
        for game in games {
            // Header rows with a blank id still produce games, but they can't be keyed
            if game.game_id.is_empty() {
                debug!(date = %game.date, "Not storing game without an id");
                continue;
            }
            stored.insert(game.game_id.clone(), game.clone());
            saved += 1;
        }
        Ok(saved)
    }

    fn game_by_id(&self, game_id: &str) -> Result<Option<Game>> {
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(games.get(game_id).cloned())
    }

    fn games_by_team(&self, team: &str, limit: usize) -> Result<Vec<Game>> {
        self.select(limit, |g| g.involves_team(team))
    }

    fn live_games(&self) -> Result<Vec<Game>> {
        self.select(usize::MAX, |g| g.status == GameStatus::Live)
    }
}
