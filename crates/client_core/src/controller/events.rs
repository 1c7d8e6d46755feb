//! Inputs to the session reducer and the effects it asks for.

use std::time::Duration;

use shared::domain::GameId;

use crate::{
    backend::{EndOutcome, GuessOutcome, StartOutcome, TilesOutcome},
    error::BackendError,
    input::Key,
};

#[derive(Debug)]
pub enum SessionEvent {
    /// The client came up and should open a game.
    Start,
    Key(Key),
    /// One clock period elapsed.
    Tick,
    /// The player is leaving; the game ends now.
    Close,
    Completed(Completion),
    BannerElapsed(u64),
}

/// A backend reply, tagged with the epoch its request was sent under.
#[derive(Debug)]
pub struct Completion {
    pub epoch: u64,
    pub reply: Reply,
}

#[derive(Debug)]
pub enum Reply {
    Started(Result<StartOutcome, BackendError>),
    TilesFetched(Result<TilesOutcome, BackendError>),
    GuessJudged {
        word: String,
        result: Result<GuessOutcome, BackendError>,
    },
    Ended(Result<EndOutcome, BackendError>),
}

impl Reply {
    pub fn name(&self) -> &'static str {
        match self {
            Reply::Started(_) => "start",
            Reply::TilesFetched(_) => "fetch_tiles",
            Reply::GuessJudged { .. } => "submit_guess",
            Reply::Ended(_) => "end_game",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Start,
    FetchTiles { game_id: GameId },
    SubmitGuess { game_id: GameId, word: String },
    EndGame { game_id: GameId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Request { epoch: u64, request: Request },
    /// Restart the tick schedule so the first tick lands one period from now.
    StartClock,
    ResetBannerAfter { token: u64, delay: Duration },
}
