//! Per-round word queue.
//!
//! A round starts with the whole pool in a fresh random order. Guessed words
//! are removed one at a time; the round ends when nothing is left.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{fisher_yates, EngineError};

/// Return a uniformly shuffled copy of `pool`.
///
/// Pure apart from the RNG: the pool itself is never reordered, so every
/// round can start from the same original list.
pub fn shuffle_words<R: Rng + ?Sized>(pool: &[String], rng: &mut R) -> Vec<String> {
    let mut words = pool.to_vec();
    fisher_yates(&mut words, rng);
    words
}

/// What is left after removing a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueStatus {
    /// Words remain; the count is given.
    Remaining(usize),
    /// The queue is now empty and the round is over.
    Exhausted,
}

/// Words still to be guessed this round, in presentation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordQueue {
    words: Vec<String>,
    cursor: usize,
}

impl WordQueue {
    /// Queue the given words in the given order.
    pub fn new(words: Vec<String>) -> Self {
        Self { words, cursor: 0 }
    }

    /// Queue a freshly shuffled copy of `pool`.
    pub fn shuffled<R: Rng + ?Sized>(pool: &[String], rng: &mut R) -> Self {
        Self::new(shuffle_words(pool, rng))
    }

    /// Replace the contents with a freshly shuffled copy of `pool`.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, pool: &[String], rng: &mut R) {
        self.words = shuffle_words(pool, rng);
        self.cursor = 0;
    }

    /// The word currently shown.
    pub fn peek(&self) -> Result<&str, EngineError> {
        self.words
            .get(self.cursor)
            .map(String::as_str)
            .ok_or(EngineError::EmptyQueue)
    }

    /// Remove the word currently shown and move the cursor back to the front.
    pub fn remove_current(&mut self) -> Result<QueueStatus, EngineError> {
        if self.cursor >= self.words.len() {
            return Err(EngineError::EmptyQueue);
        }
        self.words.remove(self.cursor);
        self.cursor = 0;

        Ok(if self.words.is_empty() {
            QueueStatus::Exhausted
        } else {
            QueueStatus::Remaining(self.words.len())
        })
    }

    /// Show the front word again.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Remaining words in presentation order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}
