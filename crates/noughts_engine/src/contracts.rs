//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::invariants::{ControllerInvariants, InvariantSet};
use crate::{GameController, GameMode, Move, MoveError};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(after: &S) -> Result<(), MoveError>;
}

/// Who is trying to act on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// A person clicking a cell.
    Human,
    /// The computer opponent.
    Computer,
}

/// Precondition: The round has not reached a terminal outcome.
pub struct RoundActive;

impl RoundActive {
    /// Rejects moves once the round is won or drawn.
    pub fn check(game: &GameController) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto occupied squares.
    pub fn check(mv: &Move, game: &GameController) -> Result<(), MoveError> {
        if game.board().is_empty(mv.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mv.position))
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects marks for the symbol that does not hold the turn.
    pub fn check(mv: &Move, game: &GameController) -> Result<(), MoveError> {
        if mv.player == game.to_move() {
            Ok(())
        } else {
            Err(MoveError::WrongTurn(mv.player))
        }
    }
}

/// Precondition: In a game against the computer, each side moves only on its own turn.
pub struct ActorHoldsTurn;

impl ActorHoldsTurn {
    /// Two-player games let a human act for either symbol.
    pub fn check(actor: Actor, game: &GameController) -> Result<(), MoveError> {
        if game.mode() == GameMode::HumanVsHuman {
            return Ok(());
        }
        let humans_turn = game.to_move() == game.human_symbol();
        match actor {
            Actor::Human if !humans_turn => Err(MoveError::WrongTurn(game.human_symbol())),
            Actor::Computer if humans_turn => Err(MoveError::NotComputerTurn),
            _ => Ok(()),
        }
    }
}

/// Composite precondition: round live, square empty, right symbol.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mv: &Move, game: &GameController) -> Result<(), MoveError> {
        RoundActive::check(game)?;
        SquareIsEmpty::check(mv, game)?;
        PlayersTurn::check(mv, game)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions: see [`LegalMove`].
/// Postconditions: every [`ControllerInvariants`] member holds.
pub struct MoveContract;

impl Contract<GameController, Move> for MoveContract {
    fn pre(game: &GameController, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(after: &GameController) -> Result<(), MoveError> {
        ControllerInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameController::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = GameController::new();
        game.submit_move(1, 1).expect("legal move");

        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameController::new();
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongTurn(Player::O))
        );
    }

    #[test]
    fn test_precondition_round_over() {
        let mut game = GameController::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.submit_move(row, col).expect("legal move");
        }
        let action = Move::new(Player::O, Position::BottomRight);
        assert_eq!(MoveContract::pre(&game, &action), Err(MoveError::GameOver));
    }

    #[test]
    fn test_actor_gating_against_computer() {
        let mut game = GameController::new();
        game.set_mode(GameMode::HumanVsComputer);
        game.set_human_symbol(Player::O);

        // X opens, and X belongs to the computer.
        assert_eq!(
            ActorHoldsTurn::check(Actor::Human, &game),
            Err(MoveError::WrongTurn(Player::O))
        );
        assert!(ActorHoldsTurn::check(Actor::Computer, &game).is_ok());
    }

    #[test]
    fn test_actor_gating_two_players() {
        let game = GameController::new();
        assert!(ActorHoldsTurn::check(Actor::Human, &game).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut game = GameController::new();
        game.submit_move(1, 1).expect("legal move");
        assert!(MoveContract::post(&game).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut game = GameController::new();
        game.submit_move(1, 1).expect("legal move");

        game.board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(matches!(
            MoveContract::post(&game),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
