use shared::domain::TileId;

use crate::board::Tile;

/// The word being composed, in the order its tiles were picked.
#[derive(Debug, Clone, Default)]
pub struct Guess {
    tiles: Vec<Tile>,
}

impl Guess {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, tile: Tile) {
        debug_assert!(
            self.tiles.iter().all(|t| t.id != tile.id),
            "tile {:?} already in guess",
            tile.id
        );
        self.tiles.push(tile);
    }

    /// Pops the most recent pick. The caller unpicks the returned id on the
    /// board.
    pub fn remove_last(&mut self) -> Option<TileId> {
        self.tiles.pop().map(|tile| tile.id)
    }

    pub fn to_word(&self) -> String {
        self.tiles
            .iter()
            .flat_map(|tile| tile.letter.to_lowercase())
            .collect()
    }

    /// Empties the guess without touching the board.
    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn ids(&self) -> Vec<TileId> {
        self.tiles.iter().map(|tile| tile.id).collect()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The guess padded with empty slots up to `capacity`. A longer guess is
    /// returned whole.
    pub fn slots(&self, capacity: usize) -> Vec<Option<&Tile>> {
        let mut slots: Vec<_> = self.tiles.iter().map(Some).collect();
        slots.resize(capacity.max(self.tiles.len()), None);
        slots
    }
}
