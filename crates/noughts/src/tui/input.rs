//! Keyboard input: cursor movement and key-to-intent mapping.

use crossterm::event::KeyCode;
use noughts_engine::{Player, Position};

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move the cell cursor.
    Cursor(Step),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark on a specific cell.
    Place(Position),
    /// Switch between two players and playing the computer.
    ToggleMode,
    /// Pick the human's symbol against the computer.
    ChooseSymbol(Player),
    /// Clear the board, keep scores.
    ResetBoard,
    /// Clear the board and scores.
    NewGame,
    /// Switch light/dark.
    ToggleTheme,
    /// Leave the app.
    Quit,
}

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Towards row 0.
    Up,
    /// Towards row 2.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 2.
    Right,
}

/// Maps a key press to an intent.
///
/// Digits 1-9 address cells in reading order, like a phone keypad.
pub fn intent_for(key: KeyCode) -> Option<Intent> {
    let intent = match key {
        KeyCode::Up => Intent::Cursor(Step::Up),
        KeyCode::Down => Intent::Cursor(Step::Down),
        KeyCode::Left => Intent::Cursor(Step::Left),
        KeyCode::Right => Intent::Cursor(Step::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Intent::PlaceAtCursor,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Intent::Place(Position::from_index(index)?)
        }
        KeyCode::Char('m') => Intent::ToggleMode,
        KeyCode::Char('x') => Intent::ChooseSymbol(Player::X),
        KeyCode::Char('o') => Intent::ChooseSymbol(Player::O),
        KeyCode::Char('r') => Intent::ResetBoard,
        KeyCode::Char('n') => Intent::NewGame,
        KeyCode::Char('t') => Intent::ToggleTheme,
        KeyCode::Char('q') | KeyCode::Esc => Intent::Quit,
        _ => return None,
    };
    Some(intent)
}

/// Moves the cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, step: Step) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match step {
        Step::Up => (row.saturating_sub(1), col),
        Step::Down => ((row + 1).min(2), col),
        Step::Left => (row, col.saturating_sub(1)),
        Step::Right => (row, (col + 1).min(2)),
    };
    Position::from_coords(row, col).unwrap_or(cursor)
}
