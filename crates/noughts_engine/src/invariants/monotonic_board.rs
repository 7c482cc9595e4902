//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, GameController, Square};

/// Invariant: the board is exactly the replay of this round's history.
///
/// Replaying fails if any move targets a cell an earlier move already
/// took, so an overwritten square can never satisfy it.
pub struct MonotonicBoardInvariant;

impl Invariant<GameController> for MonotonicBoardInvariant {
    fn holds(game: &GameController) -> bool {
        let mut reconstructed = Board::new();

        for mv in game.history() {
            if !reconstructed.is_empty(mv.position) {
                return false;
            }
            reconstructed.set(mv.position, Square::Occupied(mv.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameController::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut game = GameController::new();
        for (row, col) in [(0, 0), (1, 1), (0, 2), (2, 0)] {
            game.submit_move(row, col).expect("legal move");
        }
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = GameController::new();
        game.submit_move(1, 1).expect("legal move");

        game.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_history_entry_violates() {
        let mut game = GameController::new();
        game.submit_move(1, 1).expect("legal move");

        game.history.push(Move::new(Player::O, Position::Center));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
