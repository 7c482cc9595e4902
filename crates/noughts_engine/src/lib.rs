//! Tic-tac-toe game engine.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`] plus the pure functions in [`rules`]
//!   (`evaluate`, `is_legal_move`, `apply_move`)
//! - **Controller**: [`GameController`] owns one session: board, turn, mode,
//!   human symbol, round outcome and [`Scoreboard`]
//! - **Computer opponent**: any [`MovePolicy`]; [`RandomPolicy`] picks a
//!   uniformly random empty cell
//! - **Checks**: [`contracts`] gate every move, [`invariants`] are verified
//!   after every accepted move in debug builds
//!
//! # Example
//!
//! ```
//! use noughts_engine::{GameController, GameMode, GameStatus, Player, RandomPolicy};
//!
//! let mut game = GameController::with_mode(GameMode::HumanVsComputer, Player::X);
//! game.submit_move(1, 1).expect("center is free");
//!
//! let mut policy = RandomPolicy::seeded(7);
//! let turn = game.pending_computer_turn().expect("computer plays O");
//! let reply = game.play_computer_turn(turn, &mut policy).expect("ticket is fresh");
//! assert_eq!(reply.mv.player, Player::O);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod policy;
mod position;
mod scores;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use controller::{ComputerTurn, GameController, Placement};
pub use policy::{MovePolicy, RandomPolicy};
pub use position::Position;
pub use scores::Scoreboard;
pub use types::{Board, GameMode, GameStatus, Player, Square};
