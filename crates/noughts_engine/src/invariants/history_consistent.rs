//! History consistency invariant: the record agrees with the board.

use super::Invariant;
use crate::{GameController, Square, rules};

/// Invariant: history, board and status tell the same story.
///
/// - one history entry per mark on the board
/// - each entry's cell holds that entry's player
/// - the stored status is what the rules say about the board
pub struct HistoryConsistentInvariant;

impl Invariant<GameController> for HistoryConsistentInvariant {
    fn holds(game: &GameController) -> bool {
        let board = game.board();

        board.filled_count() == game.history().len()
            && game
                .history()
                .iter()
                .all(|mv| board.get(mv.position) == Square::Occupied(mv.player))
            && rules::evaluate(board) == game.status()
    }

    fn description() -> &'static str {
        "History, board and status agree"
    }
}
