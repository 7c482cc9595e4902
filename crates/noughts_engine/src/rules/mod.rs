//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`] snapshot. Nothing in here touches turn
//! order, modes or scores; that belongs to the controller.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::{Board, GameStatus, MoveError, Player, Position, Square};
use tracing::{debug, instrument};

/// Classifies a board as won, drawn or still in progress.
///
/// A completed line takes precedence over a full board, so the last move
/// that both fills the grid and completes a line is a win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// True iff `(row, col)` is on the board and the cell is empty.
#[instrument(skip(board))]
pub fn is_legal_move(board: &Board, row: usize, col: usize) -> bool {
    Position::from_coords(row, col).is_some_and(|pos| board.is_empty(pos))
}

/// Returns a copy of `board` with `player` placed at `(row, col)`.
///
/// # Errors
///
/// `OutOfBounds` for coordinates off the grid, `SquareOccupied` when the
/// cell already holds a mark. The input board is never modified.
#[instrument(skip(board))]
pub fn apply_move(
    board: &Board,
    row: usize,
    col: usize,
    player: Player,
) -> Result<Board, MoveError> {
    let pos = Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
    place(board, pos, player)
}

/// [`apply_move`] for callers that already hold a [`Position`].
pub fn place(board: &Board, pos: Position, player: Player) -> Result<Board, MoveError> {
    if !board.is_empty(pos) {
        return Err(MoveError::SquareOccupied(pos));
    }
    let mut next = *board;
    next.set(pos, Square::Occupied(player));
    debug!(position = %pos, %player, "Mark placed");
    Ok(next)
}
