//! Translation of raw key presses into player intents.

use crate::guess::Guess;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Char(char),
    /// Any key that produces no character (arrows, function keys, ...).
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Pick(char),
    Backspace,
    Submit,
    Refresh,
}

/// Maps a key to an intent. Enter and Backspace on an empty guess map to
/// nothing; whether a letter matches a tile is left to the board.
pub fn dispatch(key: Key, guess: &Guess) -> Option<Intent> {
    match key {
        Key::Enter if !guess.is_empty() => Some(Intent::Submit),
        Key::Backspace if !guess.is_empty() => Some(Intent::Backspace),
        Key::Enter | Key::Backspace | Key::Other => None,
        Key::Char(' ') => Some(Intent::Refresh),
        Key::Char(c) if c.is_control() => None,
        Key::Char(c) => Some(Intent::Pick(uppercase(c))),
    }
}

// Letters whose uppercase form is several chars (ß) are kept as typed.
fn uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
