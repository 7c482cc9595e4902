//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameController, Player};

/// Invariant: players alternate turns, starting with X.
///
/// While the round is live `to_move` is the side after the last mover.
/// Once it is over `to_move` stays frozen on the side that ended it.
pub struct AlternatingTurnInvariant;

impl Invariant<GameController> for AlternatingTurnInvariant {
    fn holds(game: &GameController) -> bool {
        let history = game.history();

        if history.first().is_some_and(|mv| mv.player != Player::FIRST) {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        match history.last() {
            None => game.to_move() == Player::FIRST,
            Some(last) if game.is_over() => game.to_move() == last.player,
            Some(last) => game.to_move() == last.player.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
