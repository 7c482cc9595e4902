//! Move selection for the computer opponent.

use crate::{Board, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Something that can pick a cell for the side to move.
pub trait MovePolicy {
    /// Picks a cell on `board`, or `None` when it has nothing to offer.
    ///
    /// The controller validates the choice like any other move.
    fn choose(&mut self, board: &Board) -> Option<Position>;
}

/// Picks uniformly among the empty cells.
#[derive(Debug, Clone)]
pub struct RandomPolicy<R = StdRng> {
    rng: R,
}

impl<R: rand::Rng> RandomPolicy<R> {
    /// Wraps an existing random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPolicy<StdRng> {
    /// Seeds from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible sequence of choices for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: rand::Rng> MovePolicy for RandomPolicy<R> {
    #[instrument(skip_all)]
    fn choose(&mut self, board: &Board) -> Option<Position> {
        let empty = board.empty_positions();
        let choice = empty.choose(&mut self.rng).copied();
        debug!(candidates = empty.len(), ?choice, "Random policy chose");
        choice
    }
}
