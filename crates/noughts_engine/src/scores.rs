//! Session score tally.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win counts per symbol. Draws are not tallied.
///
/// Lives for the whole session: `reset_board` keeps it, `new_game` zeroes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    x: u32,
    o: u32,
}

impl Scoreboard {
    /// Creates an all-zero tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Adds one win for `player`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, player: Player) {
        let slot = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        *slot = slot.saturating_add(1);
        debug!(%player, wins = *slot, "Win recorded");
    }

    /// Zeroes both entries.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rounds won by anyone.
    pub fn total(&self) -> u32 {
        self.x.saturating_add(self.o)
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}", self.x, self.o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_reset() {
        let mut scores = Scoreboard::new();
        scores.record_win(Player::O);
        scores.record_win(Player::O);
        scores.record_win(Player::X);
        assert_eq!(scores.wins(Player::O), 2);
        assert_eq!(scores.wins(Player::X), 1);
        assert_eq!(scores.total(), 3);
        assert_eq!(scores.to_string(), "X: 1  O: 2");

        scores.reset();
        assert_eq!(scores, Scoreboard::new());
    }
}
