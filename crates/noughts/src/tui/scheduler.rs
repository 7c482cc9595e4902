//! Deferred computer moves.
//!
//! The turn passes to the computer immediately; its move shows up a short
//! while later. Each delay runs as its own tokio task that hands the ticket
//! back to the event loop, which asks the controller to redeem it. Tickets
//! that went stale in the meantime are discarded by the controller.

use noughts_engine::ComputerTurn;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Sends computer-turn tickets back after a fixed delay.
#[derive(Debug, Clone)]
pub struct ComputerScheduler {
    delay: Duration,
    due_tx: mpsc::UnboundedSender<ComputerTurn>,
}

impl ComputerScheduler {
    /// Creates a scheduler and the receiver that yields tickets when due.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<ComputerTurn>) {
        let (due_tx, due_rx) = mpsc::unbounded_channel();
        (Self { delay, due_tx }, due_rx)
    }

    /// Delivers `turn` on the receiver once the delay has elapsed.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&self, turn: ComputerTurn) -> JoinHandle<()> {
        let delay = self.delay;
        let due_tx = self.due_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if due_tx.send(turn).is_err() {
                debug!("Event loop gone, dropping computer turn");
            }
        })
    }
}
