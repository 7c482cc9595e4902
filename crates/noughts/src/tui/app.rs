//! Application state and intent handling.

use super::input::{self, Intent};
use crate::settings::Settings;
use crate::theme::Theme;
use noughts_engine::{
    ComputerTurn, GameController, GameMode, GameStatus, Player, Position, RandomPolicy,
};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Holds the one [`GameController`] for the session plus everything that
/// only matters to the screen: cursor, theme and the outstanding computer
/// ticket.
pub struct App {
    game: GameController,
    policy: RandomPolicy,
    theme: Theme,
    cursor: Position,
    scheduled: Option<ComputerTurn>,
    should_quit: bool,
}

impl App {
    /// Creates the app from resolved settings.
    #[instrument(skip_all)]
    pub fn new(settings: &Settings) -> Self {
        let policy = match settings.seed() {
            Some(seed) => RandomPolicy::seeded(*seed),
            None => RandomPolicy::from_entropy(),
        };
        Self {
            game: GameController::with_mode(*settings.mode(), *settings.human_symbol()),
            policy,
            theme: *settings.theme(),
            cursor: Position::Center,
            scheduled: None,
            should_quit: false,
        }
    }

    /// Gets the controller.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Active colour scheme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True after a quit intent.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one intent. Rejected moves leave everything as it was.
    #[instrument(skip(self))]
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::Cursor(step) => self.cursor = input::move_cursor(self.cursor, step),
            Intent::PlaceAtCursor => self.place(self.cursor),
            Intent::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Intent::ToggleMode => self.game.set_mode(self.game.mode().toggle()),
            Intent::ChooseSymbol(symbol) => {
                // The symbol picker only exists while playing the computer.
                if self.game.mode() == GameMode::HumanVsComputer {
                    self.game.set_human_symbol(symbol);
                }
            }
            Intent::ResetBoard => self.game.reset_board(),
            Intent::NewGame => self.game.new_game(),
            Intent::ToggleTheme => {
                self.theme = self.theme.toggle();
                info!(theme = %self.theme, "Theme changed");
            }
            Intent::Quit => self.should_quit = true,
        }
    }

    fn place(&mut self, pos: Position) {
        if let Err(err) = self.game.submit_move(pos.row(), pos.col()) {
            debug!(%err, "Click ignored");
        }
    }

    /// Ticket the event loop should schedule, if it has not already.
    pub fn next_computer_turn(&mut self) -> Option<ComputerTurn> {
        let turn = self.game.pending_computer_turn()?;
        if self.scheduled == Some(turn) {
            return None;
        }
        self.scheduled = Some(turn);
        Some(turn)
    }

    /// A scheduled ticket came due.
    #[instrument(skip(self))]
    pub fn on_computer_turn(&mut self, turn: ComputerTurn) {
        if self.scheduled == Some(turn) {
            self.scheduled = None;
        }
        if let Some(placement) = self.game.play_computer_turn(turn, &mut self.policy) {
            debug!(mv = %placement.mv, "Computer moved");
        }
    }

    /// Whether the cell can be clicked right now.
    pub fn is_clickable(&self, pos: Position) -> bool {
        self.game.is_clickable(pos.row(), pos.col())
    }

    /// One-line summary of the round for the status bar.
    pub fn status_line(&self) -> String {
        let game = &self.game;
        match game.status() {
            GameStatus::InProgress => match game.mode() {
                GameMode::HumanVsComputer if game.to_move() == game.human_symbol() => {
                    format!("Your turn ({})", game.human_symbol())
                }
                GameMode::HumanVsComputer => "AI's turn".to_string(),
                GameMode::HumanVsHuman => format!("Turn: {}", game.to_move()),
            },
            terminal => terminal.to_string(),
        }
    }

    /// Score for one side, formatted for the panel.
    pub fn score_label(&self, player: Player) -> String {
        format!("{}: {}", player, self.game.scores().wins(player))
    }
}
