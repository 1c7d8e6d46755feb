//! Read-only projection of a session for whatever draws it.

use std::fmt;

use crate::{
    board::Tile,
    controller::reducer::{Banner, Phase, Session},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileView {
    Face { letter: char, points: i64 },
    /// A picked tile leaves an empty square behind on the board.
    Empty,
}

impl TileView {
    fn face(tile: &Tile) -> Self {
        TileView::Face {
            letter: tile.letter,
            points: tile.points,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockView {
    NotStarted,
    SecondsLeft(i64),
    GameOver,
}

impl fmt::Display for ClockView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockView::NotStarted => f.write_str("--"),
            ClockView::SecondsLeft(seconds) => write!(f, "{seconds}s"),
            ClockView::GameOver => f.write_str("Game over!"),
        }
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Banner::Title => "SPEEDRABBLE",
            Banner::Accepted => "GOOD ONE!",
            Banner::Rejected => "NICE TRY...",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub phase: Phase,
    pub banner: Banner,
    pub board: Vec<TileView>,
    pub board_generation: u64,
    /// The guess padded with `None` up to the configured slot count.
    pub guess: Vec<Option<TileView>>,
    pub points: i64,
    pub clock: ClockView,
}

impl RenderState {
    pub fn project(session: &Session) -> Self {
        let board = session
            .board()
            .tiles()
            .iter()
            .map(|tile| {
                if tile.picked {
                    TileView::Empty
                } else {
                    TileView::face(tile)
                }
            })
            .collect();
        let guess = session
            .guess()
            .slots(session.rules().guess_slots)
            .into_iter()
            .map(|slot| slot.map(TileView::face))
            .collect();
        let clock = match session.phase() {
            Phase::Unstarted => ClockView::NotStarted,
            Phase::Ended => ClockView::GameOver,
            Phase::Active | Phase::Ending => ClockView::SecondsLeft(session.time_left()),
        };
        Self {
            phase: session.phase(),
            banner: session.banner(),
            board,
            board_generation: session.board().generation(),
            guess,
            points: session.points(),
            clock,
        }
    }
}
