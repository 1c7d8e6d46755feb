//! Client-side session controller for a timed word-tile game.
//!
//! The board, the guess being spelled, and the round clock are plain values
//! owned by a [`Session`]; the [`SessionDriver`] runs it against a
//! [`GameBackend`], tagging every request with the session epoch so that
//! replies which arrive after the game has ended are dropped.

pub mod backend;
pub mod board;
pub mod controller;
pub mod error;
pub mod guess;
pub mod input;
pub mod render;
pub mod rules;
pub mod timer;

pub use backend::{
    EndOutcome, GameBackend, GuessOutcome, HttpBackend, StartOutcome, TilesOutcome,
};
pub use board::{Board, Tile};
pub use controller::{
    events::{Command, Completion, Reply, Request, SessionEvent},
    orchestration::SessionDriver,
    reducer::{Banner, Phase, Session},
};
pub use error::BackendError;
pub use guess::Guess;
pub use input::{Intent, Key};
pub use render::{ClockView, RenderState, TileView};
pub use rules::GameRules;
pub use timer::{ClockSignal, Countdown};
