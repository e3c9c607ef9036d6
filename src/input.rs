#![warn(clippy::all, clippy::pedantic)]

use crossterm::event::KeyCode;

use crate::components::Command;

/// Map a raw key code to an engine command. Unrecognized keys map to `None`
/// and are ignored by the caller.
#[must_use]
pub fn map_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left | KeyCode::Char('a') => Some(Command::ShiftLeft),
        KeyCode::Right | KeyCode::Char('d') => Some(Command::ShiftRight),
        KeyCode::Down | KeyCode::Char('s') => Some(Command::SoftDrop),
        KeyCode::Up | KeyCode::Char('w') => Some(Command::Rotate),
        _ => None,
    }
}
