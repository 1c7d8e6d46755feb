use shared::domain::{TileFace, TileId};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub letter: char,
    pub points: i64,
    pub picked: bool,
}

/// The tiles currently offered to the player and which of them are picked.
#[derive(Debug, Clone, Default)]
pub struct Board {
    tiles: Vec<Tile>,
    generation: u64,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the board wholesale. Ids are reassigned 0..n-1 and every tile
    /// starts unpicked.
    pub fn load(&mut self, faces: &[TileFace]) {
        self.tiles = faces
            .iter()
            .enumerate()
            .map(|(slot, face)| Tile {
                id: TileId(slot),
                letter: face.letter,
                points: face.points,
                picked: false,
            })
            .collect();
        self.generation += 1;
        debug!(
            generation = self.generation,
            tiles = self.tiles.len(),
            "board: loaded"
        );
    }

    /// Picks the lowest-id unpicked tile showing `letter`, ignoring case.
    pub fn pick(&mut self, letter: char) -> Option<Tile> {
        let tile = self
            .tiles
            .iter_mut()
            .find(|tile| !tile.picked && same_letter(tile.letter, letter))?;
        tile.picked = true;
        Some(*tile)
    }

    pub fn unpick(&mut self, id: TileId) {
        if let Some(tile) = self.tiles.iter_mut().find(|tile| tile.id == id) {
            tile.picked = false;
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id == id)
    }

    /// Number of loads so far; tells board reloads apart even though ids repeat.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faces(letters: &str) -> Vec<TileFace> {
        letters.chars().map(|c| TileFace::new(c, 1)).collect()
    }

    #[test]
    fn load_assigns_positional_ids_all_unpicked() {
        let mut board = Board::new();
        board.load(&faces("CAT"));
        let ids: Vec<_> = board.tiles().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TileId(0), TileId(1), TileId(2)]);
        assert!(board.tiles().iter().all(|t| !t.picked));
        assert_eq!(board.generation(), 1);
    }

    #[test]
    fn empty_load_yields_empty_board() {
        let mut board = Board::new();
        board.load(&faces("AB"));
        board.load(&[]);
        assert!(board.is_empty());
        assert_eq!(board.generation(), 2);
    }

    #[test]
    fn pick_takes_first_unpicked_match_in_id_order() {
        let mut board = Board::new();
        board.load(&faces("XYAQRAZ"));
        assert_eq!(board.pick('A').map(|t| t.id), Some(TileId(2)));
        assert_eq!(board.pick('A').map(|t| t.id), Some(TileId(5)));
        assert_eq!(board.pick('A'), None);
    }

    #[test]
    fn pick_is_case_insensitive() {
        let mut board = Board::new();
        board.load(&faces("Éa"));
        assert_eq!(board.pick('é').map(|t| t.id), Some(TileId(0)));
        assert_eq!(board.pick('A').map(|t| t.id), Some(TileId(1)));
    }

    #[test]
    fn unpick_of_unknown_or_unpicked_tile_is_a_no_op() {
        let mut board = Board::new();
        board.load(&faces("AB"));
        board.unpick(TileId(9));
        board.unpick(TileId(1));
        assert!(board.tiles().iter().all(|t| !t.picked));

        board.pick('a');
        board.unpick(TileId(0));
        assert!(!board.get(TileId(0)).expect("tile").picked);
    }

    #[test]
    fn reload_discards_picks() {
        let mut board = Board::new();
        board.load(&faces("AB"));
        board.pick('A');
        board.load(&faces("AB"));
        assert!(board.tiles().iter().all(|t| !t.picked));
    }
}
