//! Raw-mode terminal plumbing: key capture and a plain text renderer.

use std::{
    io::{self, Write},
    thread,
};

use client_core::{Key, RenderState, TileView};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tracing::{debug, warn};

const HELP: &str = "type letters to spell | Enter submit | Backspace undo | Space new tiles (-5s) | Esc quit";

/// Puts the terminal in raw mode on an alternate screen until dropped.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Key(Key),
    Quit,
    Ignore,
}

pub fn map_key(event: KeyEvent) -> KeyAction {
    if event.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }
    match event.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Enter => KeyAction::Key(Key::Enter),
        KeyCode::Backspace => KeyAction::Key(Key::Backspace),
        KeyCode::Char(_)
            if event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            KeyAction::Key(Key::Other)
        }
        KeyCode::Char(c) => KeyAction::Key(Key::Char(c)),
        _ => KeyAction::Key(Key::Other),
    }
}

/// Reads keys on a dedicated thread. The channel closes when the player quits.
pub fn spawn_key_reader() -> UnboundedReceiver<Key> {
    let (tx, rx) = unbounded_channel();
    thread::spawn(move || loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(error) => {
                warn!(%error, "terminal: failed to read input");
                break;
            }
        };
        let Event::Key(key_event) = event else {
            continue;
        };
        match map_key(key_event) {
            KeyAction::Key(key) => {
                if tx.send(key).is_err() {
                    break;
                }
            }
            KeyAction::Quit => {
                debug!("terminal: quit requested");
                break;
            }
            KeyAction::Ignore => {}
        }
    });
    rx
}

fn tile_cell(view: Option<&TileView>, empty: &str) -> String {
    match view {
        Some(TileView::Face { letter, points }) => format!("[{letter}{points:>2}]"),
        Some(TileView::Empty) | None => format!("[{empty}]"),
    }
}

pub fn format_frame(state: &RenderState) -> Vec<String> {
    let board = state
        .board
        .iter()
        .map(|view| tile_cell(Some(view), "   "))
        .collect::<Vec<_>>()
        .join(" ");
    let guess = state
        .guess
        .iter()
        .map(|slot| tile_cell(slot.as_ref(), "___"))
        .collect::<Vec<_>>()
        .join(" ");
    vec![
        format!("== {} ==", state.banner),
        String::new(),
        format!("tiles: {board}"),
        format!("guess: {guess}"),
        String::new(),
        format!("🧮 {} pts    ⏱️ {}", state.points, state.clock),
        String::new(),
        HELP.to_string(),
    ]
}

pub fn draw(state: &RenderState) -> io::Result<()> {
    let mut out = io::stdout();
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    for (row, line) in format_frame(state).iter().enumerate() {
        queue!(out, MoveTo(0, row as u16))?;
        write!(out, "{line}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::{Banner, ClockView, Phase};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn maps_game_keys() {
        assert_eq!(map_key(press(KeyCode::Enter)), KeyAction::Key(Key::Enter));
        assert_eq!(
            map_key(press(KeyCode::Backspace)),
            KeyAction::Key(Key::Backspace)
        );
        assert_eq!(
            map_key(press(KeyCode::Char(' '))),
            KeyAction::Key(Key::Char(' '))
        );
        assert_eq!(map_key(press(KeyCode::Left)), KeyAction::Key(Key::Other));
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        assert_eq!(map_key(press(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }

    #[test]
    fn control_and_alt_chords_are_not_letters() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            KeyAction::Key(Key::Other)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::ALT)),
            KeyAction::Key(Key::Other)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            KeyAction::Key(Key::Char('A'))
        );
    }

    #[test]
    fn frame_shows_picked_tiles_as_gaps_and_pads_guess() {
        let state = RenderState {
            phase: Phase::Active,
            banner: Banner::Accepted,
            board: vec![
                TileView::Face {
                    letter: 'C',
                    points: 3,
                },
                TileView::Empty,
            ],
            board_generation: 1,
            guess: vec![
                Some(TileView::Face {
                    letter: 'A',
                    points: 1,
                }),
                None,
            ],
            points: 12,
            clock: ClockView::SecondsLeft(41),
        };
        let frame = format_frame(&state);
        assert_eq!(frame[0], "== GOOD ONE! ==");
        assert_eq!(frame[2], "tiles: [C 3] [   ]");
        assert_eq!(frame[3], "guess: [A 1] [___]");
        assert_eq!(frame[5], "🧮 12 pts    ⏱️ 41s");
    }
}
