//! Normalization of the positional scoreboard payload into games.
//!
//! decode (row-sets → typed rows) → assemble (join by game id) → resolve
//! (status and winner). Nothing here fails: malformed rows degrade to
//! skipped rows or zero-valued fields.

pub mod assembler;
pub mod cells;
pub mod decoder;
pub mod rows;
pub mod schema;
pub mod status;
pub mod wire;

pub use wire::{ResultSet, ScoreboardPayload};

use chrono::NaiveDate;

use crate::models::Game;

/// Turn one day's payload into games
pub fn normalize(payload: &ScoreboardPayload, date: NaiveDate) -> Vec<Game> {
    let decoded = decoder::decode(payload);
    assembler::assemble(&decoded, date)
}
