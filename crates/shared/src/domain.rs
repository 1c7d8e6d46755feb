use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub usize);
    };
}

// Positional slot on the current board. Slots are reassigned 0..n-1 on every
// board load, so the same id can name unrelated tiles across loads.
id_newtype!(TileId);

/// Opaque game token issued by the backend on start.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl GameId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Letter and score of a tile as dealt by the backend, before it is placed on
/// a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileFace {
    pub letter: char,
    pub points: i64,
}

impl TileFace {
    pub fn new(letter: char, points: i64) -> Self {
        Self { letter, points }
    }
}
