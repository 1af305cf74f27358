//! Round progression.
//!
//! The round number only moves forward, and only when the queue runs dry.
//! Every round replays the whole pool in a new order.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::Round;
use crate::words::WordQueue;

/// Result of handling an exhausted queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A new round started with a reshuffled pool.
    Advanced(Round),
    /// The last round was cleared.
    Complete,
}

/// Current round and the words left in it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    round: Round,
    queue: WordQueue,
}

impl RoundState {
    /// Round 1 with a shuffled pool.
    pub fn start<R: Rng + ?Sized>(pool: &[String], rng: &mut R) -> Self {
        Self {
            round: Round::Describe,
            queue: WordQueue::shuffled(pool, rng),
        }
    }

    #[must_use]
    pub fn round(&self) -> Round {
        self.round
    }

    #[must_use]
    pub fn queue(&self) -> &WordQueue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut WordQueue {
        &mut self.queue
    }

    /// Words already guessed this round.
    #[must_use]
    pub fn guessed(&self, pool_size: usize) -> usize {
        pool_size.saturating_sub(self.queue.len())
    }

    /// Called once the queue is empty. Starts the next round, or reports the
    /// game as complete when `last` was just cleared.
    pub fn on_exhausted<R: Rng + ?Sized>(&mut self, pool: &[String], rng: &mut R, last: Round) -> RoundOutcome {
        debug_assert!(self.queue.is_empty(), "round advanced with words left");

        match self.round.next() {
            Some(next) if self.round < last => {
                self.round = next;
                self.queue.reshuffle(pool, rng);
                info!(round = next.number(), words = pool.len(), "round started");
                RoundOutcome::Advanced(next)
            }
            _ => RoundOutcome::Complete,
        }
    }
}
