//! Session orchestration: turns, modes, the computer opponent and scores.

use crate::contracts::{Actor, ActorHoldsTurn, Contract, MoveContract};
use crate::policy::MovePolicy;
use crate::{Board, GameMode, GameStatus, Move, MoveError, Player, Position, Scoreboard, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// A move the controller accepted, and what it did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The mark that was placed.
    pub mv: Move,
    /// Round outcome right after the move.
    pub status: GameStatus,
}

/// Ticket for one computer turn.
///
/// Issued by [`GameController::pending_computer_turn`] and redeemed, usually
/// after a short delay, by [`GameController::play_computer_turn`]. A ticket
/// names the round and ply it was issued for, so one that outlives a reset,
/// a mode change or another move is recognised and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComputerTurn {
    round: u64,
    ply: usize,
    symbol: Player,
}

impl ComputerTurn {
    /// Round the ticket belongs to.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Number of marks on the board when the ticket was issued.
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// Symbol the computer will place.
    pub fn symbol(&self) -> Player {
        self.symbol
    }
}

/// Authoritative state for one play session.
///
/// The presentation layer owns exactly one controller and feeds it intents;
/// it reads everything it renders back out through the accessors.
#[derive(Debug, Clone)]
pub struct GameController {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
    mode: GameMode,
    human_symbol: Player,
    scores: Scoreboard,
    round: u64,
}

impl GameController {
    /// Two-player session, human plays X, zero scores.
    pub fn new() -> Self {
        Self::with_mode(GameMode::default(), Player::default())
    }

    /// Session with an initial mode and human symbol.
    #[instrument]
    pub fn with_mode(mode: GameMode, human_symbol: Player) -> Self {
        info!("Starting session");
        Self {
            board: Board::new(),
            to_move: Player::FIRST,
            status: GameStatus::InProgress,
            history: Vec::new(),
            mode,
            human_symbol,
            scores: Scoreboard::new(),
            round: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Intents
    // ─────────────────────────────────────────────────────────────

    /// Places the current symbol at `(row, col)` on behalf of a human.
    ///
    /// # Errors
    ///
    /// Rejections never change state:
    /// - `OutOfBounds` for coordinates off the grid
    /// - `GameOver` once the round is won or drawn
    /// - `SquareOccupied` for a taken cell
    /// - `WrongTurn` against the computer when the computer holds the turn
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<Placement, MoveError> {
        let Some(pos) = Position::from_coords(row, col) else {
            warn!("Rejected move off the board");
            return Err(MoveError::OutOfBounds { row, col });
        };
        self.accept(Actor::Human, pos)
    }

    /// Lets the computer place its symbol on a cell chosen by `policy`.
    ///
    /// # Errors
    ///
    /// `NotComputerTurn` when the human holds the turn. A policy choice that
    /// is not a legal move is rejected like a human's would be.
    ///
    /// # Panics
    ///
    /// In debug builds, when called outside a game against the computer,
    /// after the round has ended, or with no empty cell. Release builds
    /// return `ContractBreach` and leave the state alone.
    #[instrument(skip_all, fields(round = self.round, ply = self.history.len()))]
    pub fn computer_move(&mut self, policy: &mut impl MovePolicy) -> Result<Placement, MoveError> {
        if self.mode != GameMode::HumanVsComputer {
            return Err(self.breach("outside a game against the computer"));
        }
        if self.is_over() {
            return Err(self.breach("after the round ended"));
        }
        if self.board.empty_positions().is_empty() {
            return Err(self.breach("with no empty cell"));
        }
        if let Err(err) = ActorHoldsTurn::check(Actor::Computer, self) {
            warn!(%err, "Rejected computer move");
            return Err(err);
        }

        let pos = policy
            .choose(&self.board)
            .ok_or_else(|| self.breach("but the policy offered no cell"))?;
        self.accept(Actor::Computer, pos)
    }

    /// Ticket for the computer's turn, if the computer should move now.
    pub fn pending_computer_turn(&self) -> Option<ComputerTurn> {
        let computer = self.computer_symbol()?;
        (!self.is_over() && self.to_move == computer).then_some(ComputerTurn {
            round: self.round,
            ply: self.history.len(),
            symbol: computer,
        })
    }

    /// Redeems a ticket from [`pending_computer_turn`](Self::pending_computer_turn).
    ///
    /// Returns `None` without touching state when the ticket is stale: the
    /// board was reset, the mode or symbol changed, or someone already moved.
    #[instrument(skip(self, policy))]
    pub fn play_computer_turn(
        &mut self,
        turn: ComputerTurn,
        policy: &mut impl MovePolicy,
    ) -> Option<Placement> {
        if self.pending_computer_turn() != Some(turn) {
            debug!("Discarding stale computer turn");
            return None;
        }
        match self.computer_move(policy) {
            Ok(placement) => Some(placement),
            Err(err) => {
                warn!(%err, "Computer turn produced no move");
                None
            }
        }
    }

    /// Clears the board for a fresh round. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.board = Board::new();
        self.to_move = Player::FIRST;
        self.status = GameStatus::InProgress;
        self.history.clear();
        self.round = self.round.wrapping_add(1);
        info!(round = self.round, "Board reset");
    }

    /// Zeroes the scores and starts a fresh round.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.scores.reset();
        info!("Scores cleared");
        self.reset_board();
    }

    /// Switches mode; always starts a new game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        info!(from = %self.mode, to = %mode, "Mode changed");
        self.mode = mode;
        self.new_game();
    }

    /// Chooses the human's symbol; always starts a new game.
    ///
    /// Only meaningful against the computer, but the choice is remembered
    /// across mode switches.
    #[instrument(skip(self))]
    pub fn set_human_symbol(&mut self, symbol: Player) {
        info!(%symbol, "Human symbol changed");
        self.human_symbol = symbol;
        self.new_game();
    }

    // ─────────────────────────────────────────────────────────────
    //  Read side
    // ─────────────────────────────────────────────────────────────

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Symbol that moves next (or moved last, once the round is over).
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Outcome of the current round.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the round is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Symbol the human plays against the computer.
    pub fn human_symbol(&self) -> Player {
        self.human_symbol
    }

    /// Symbol the computer plays, when there is a computer.
    pub fn computer_symbol(&self) -> Option<Player> {
        (self.mode == GameMode::HumanVsComputer).then(|| self.human_symbol.opponent())
    }

    /// Session score tally.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Moves played this round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Counter bumped by every reset.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// True when a human may act right now.
    pub fn is_humans_turn(&self) -> bool {
        !self.is_over()
            && (self.mode == GameMode::HumanVsHuman || self.to_move == self.human_symbol)
    }

    /// Whether a human click on `(row, col)` would be accepted.
    pub fn is_clickable(&self, row: usize, col: usize) -> bool {
        Position::from_coords(row, col)
            .is_some_and(|pos| self.is_humans_turn() && self.board.is_empty(pos))
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    fn accept(&mut self, actor: Actor, pos: Position) -> Result<Placement, MoveError> {
        let mv = Move::new(self.to_move, pos);

        let checked = MoveContract::pre(self, &mv).and_then(|()| ActorHoldsTurn::check(actor, self));
        if let Err(err) = checked {
            warn!(?actor, %mv, %err, "Rejected move");
            return Err(err);
        }

        self.board = rules::place(&self.board, pos, mv.player)?;
        self.history.push(mv);
        self.status = rules::evaluate(&self.board);

        match self.status {
            GameStatus::InProgress => self.to_move = self.to_move.opponent(),
            GameStatus::Won(winner) => {
                self.scores.record_win(winner);
                info!(%winner, scores = %self.scores, "Round won");
            }
            GameStatus::Draw => info!("Round drawn"),
        }

        #[cfg(debug_assertions)]
        if let Err(err) = MoveContract::post(self) {
            panic!("{}", err);
        }

        debug!(?actor, %mv, status = %self.status, "Move accepted");
        Ok(Placement {
            mv,
            status: self.status,
        })
    }

    fn breach(&self, reason: &str) -> MoveError {
        error!(reason, mode = %self.mode, status = %self.status, "Computer move contract breach");
        if cfg!(debug_assertions) {
            panic!("computer move requested {}", reason);
        }
        MoveError::ContractBreach(format!("computer move requested {}", reason))
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RandomPolicy, Square};

    fn vs_computer(human: Player) -> GameController {
        let mut game = GameController::new();
        game.set_mode(GameMode::HumanVsComputer);
        game.set_human_symbol(human);
        game
    }

    #[test]
    fn test_turn_flips_after_accepted_move() {
        let mut game = GameController::new();
        let placed = game.submit_move(2, 1).expect("legal move");
        assert_eq!(placed.mv, Move::new(Player::X, Position::BottomCenter));
        assert_eq!(placed.status, GameStatus::InProgress);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_out_of_range_rejected_without_change() {
        let mut game = GameController::new();
        assert_eq!(
            game.submit_move(5, 0),
            Err(MoveError::OutOfBounds { row: 5, col: 0 })
        );
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.to_move(), Player::X);
        assert!(!game.is_clickable(3, 0));
        assert!(!game.is_clickable(0, 3));
        assert!(!game.is_clickable(usize::MAX, usize::MAX));
    }

    #[test]
    fn test_pending_ticket_only_on_computer_turn() {
        let mut game = vs_computer(Player::X);
        assert_eq!(game.pending_computer_turn(), None);

        game.submit_move(0, 0).expect("legal move");
        let turn = game.pending_computer_turn().expect("computer to move");
        assert_eq!(turn.symbol(), Player::O);
        assert_eq!(turn.ply(), 1);
        assert_eq!(turn.round(), game.round());
    }

    #[test]
    fn test_computer_opens_when_human_plays_o() {
        let game = vs_computer(Player::O);
        let turn = game.pending_computer_turn().expect("computer opens");
        assert_eq!(turn.symbol(), Player::X);
        assert!(!game.is_clickable(1, 1));
    }

    #[test]
    fn test_stale_ticket_after_reset_is_ignored() {
        let mut game = vs_computer(Player::O);
        let turn = game.pending_computer_turn().expect("computer opens");

        game.reset_board();
        let mut policy = RandomPolicy::seeded(3);
        assert_eq!(game.play_computer_turn(turn, &mut policy), None);
        assert_eq!(game.board(), &Board::new());

        let fresh = game.pending_computer_turn().expect("computer opens again");
        assert_ne!(fresh, turn);
        assert!(game.play_computer_turn(fresh, &mut policy).is_some());
        assert_eq!(game.board().filled_count(), 1);
    }

    #[test]
    fn test_ticket_redeemed_once() {
        let mut game = vs_computer(Player::X);
        game.submit_move(1, 1).expect("legal move");
        let turn = game.pending_computer_turn().expect("computer to move");

        let mut policy = RandomPolicy::seeded(11);
        assert!(game.play_computer_turn(turn, &mut policy).is_some());
        assert_eq!(game.play_computer_turn(turn, &mut policy), None);
        assert_eq!(game.board().filled_count(), 2);
    }

    #[test]
    fn test_ticket_dropped_after_mode_change() {
        let mut game = vs_computer(Player::O);
        let turn = game.pending_computer_turn().expect("computer opens");

        game.set_mode(GameMode::HumanVsHuman);
        let mut policy = RandomPolicy::seeded(5);
        assert_eq!(game.play_computer_turn(turn, &mut policy), None);
        assert_eq!(game.board().filled_count(), 0);
    }

    #[test]
    fn test_computer_move_on_humans_turn_rejected() {
        let mut game = vs_computer(Player::X);
        let mut policy = RandomPolicy::seeded(8);
        assert_eq!(
            game.computer_move(&mut policy),
            Err(MoveError::NotComputerTurn)
        );
        assert_eq!(game.board().filled_count(), 0);
    }

    struct Fixed(Position);

    impl MovePolicy for Fixed {
        fn choose(&mut self, _board: &Board) -> Option<Position> {
            Some(self.0)
        }
    }

    #[test]
    fn test_policy_choosing_occupied_cell_rejected() {
        let mut game = vs_computer(Player::X);
        game.submit_move(1, 1).expect("legal move");
        let before = game.clone();

        assert_eq!(
            game.computer_move(&mut Fixed(Position::Center)),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.board(), before.board());
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    #[cfg_attr(
        debug_assertions,
        should_panic(expected = "computer move requested outside a game against the computer")
    )]
    fn test_computer_move_in_two_player_mode_is_a_breach() {
        let mut game = GameController::new();
        let result = game.computer_move(&mut RandomPolicy::seeded(1));
        assert!(matches!(result, Err(MoveError::ContractBreach(_))));
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    #[cfg_attr(
        debug_assertions,
        should_panic(expected = "computer move requested after the round ended")
    )]
    fn test_computer_move_after_round_is_a_breach() {
        let mut game = vs_computer(Player::X);
        game.submit_move(0, 0).expect("legal move");
        game.computer_move(&mut Fixed(Position::BottomLeft))
            .expect("computer move");
        game.submit_move(0, 1).expect("legal move");
        game.computer_move(&mut Fixed(Position::BottomCenter))
            .expect("computer move");
        game.submit_move(0, 2).expect("winning move");
        assert!(game.is_over());

        let result = game.computer_move(&mut Fixed(Position::BottomRight));
        assert!(matches!(result, Err(MoveError::ContractBreach(_))));
    }

    #[test]
    #[cfg_attr(
        debug_assertions,
        should_panic(expected = "computer move requested with no empty cell")
    )]
    fn test_computer_move_on_full_board_is_a_breach() {
        use Player::{O, X};

        // X O X / X O O / O X X, forced in while the round still reads as
        // in progress and the computer holds the turn.
        let mut game = vs_computer(X);
        for (pos, player) in Position::ALL.into_iter().zip([X, O, X, X, O, O, O, X, X]) {
            game.board.set(pos, Square::Occupied(player));
        }
        game.to_move = O;
        assert_eq!(game.status(), GameStatus::InProgress);
        let before = game.clone();

        let result = game.computer_move(&mut RandomPolicy::seeded(2));
        assert!(matches!(result, Err(MoveError::ContractBreach(_))));
        assert_eq!(game.board(), before.board());
        assert_eq!(game.history(), before.history());
        assert_eq!(game.to_move(), O);
    }
}
