//! Key classification
//!
//! Maps a key press to an editor [`Command`] for the current [`Mode`].
//! Unbound keys map to `None` and never reach the editor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::color::{Axis, Direction};
use crate::editor::{Command, Mode};

/// Classify `key` for `mode`.
pub fn classify(mode: Mode, key: KeyEvent) -> Option<Command> {
    match mode {
        Mode::Drawing => classify_drawing(key),
        Mode::ConfirmExit => classify_confirm(key),
    }
}

fn classify_drawing(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::RequestExit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Char('w') => Command::MoveCursor { dx: 0, dy: -1 },
        KeyCode::Char('a') => Command::MoveCursor { dx: -1, dy: 0 },
        KeyCode::Char('s') => Command::MoveCursor { dx: 0, dy: 1 },
        KeyCode::Char('d') => Command::MoveCursor { dx: 1, dy: 0 },
        KeyCode::Char('e') | KeyCode::Char(' ') => Command::Paint,
        KeyCode::Char('f') => Command::FloodFill,
        KeyCode::Char('z') => Command::Undo,
        KeyCode::Char('u') => Command::ChangeColor(Axis::Hue, Direction::Decrease),
        KeyCode::Char('j') => Command::ChangeColor(Axis::Hue, Direction::Increase),
        KeyCode::Char('i') => Command::ChangeColor(Axis::Saturation, Direction::Decrease),
        KeyCode::Char('k') => Command::ChangeColor(Axis::Saturation, Direction::Increase),
        KeyCode::Char('o') => Command::ChangeColor(Axis::Value, Direction::Decrease),
        KeyCode::Char('l') => Command::ChangeColor(Axis::Value, Direction::Increase),
        KeyCode::Up => Command::Pan { dx: 0, dy: -1 },
        KeyCode::Down => Command::Pan { dx: 0, dy: 1 },
        KeyCode::Left => Command::Pan { dx: -1, dy: 0 },
        KeyCode::Right => Command::Pan { dx: 1, dy: 0 },
        KeyCode::Char('x') | KeyCode::Esc => Command::RequestExit,
        _ => return None,
    };
    Some(command)
}

fn classify_confirm(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Command::ConfirmExit),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Command::CancelExit),
        _ => None,
    }
}
