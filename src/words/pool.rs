//! Word collection before the game starts.
//!
//! Each player privately adds their words; the pool is read-only once the
//! engine is built. Entries are trimmed and blank ones dropped. Duplicates
//! are kept: two players may well think of the same word.

use serde::{Deserialize, Serialize};

use crate::core::EngineConfig;

/// Words collected from all players.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPool {
    words: Vec<String>,
    contributors: usize,
}

impl WordPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one player's words, returning how many were kept.
    pub fn add_player_words<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.words.len();
        self.words.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_string())
                .filter(|w| !w.is_empty()),
        );
        self.contributors += 1;
        self.words.len() - before
    }

    /// Number of players who have added words so far.
    #[must_use]
    pub fn contributors(&self) -> usize {
        self.contributors
    }

    /// Pool size once every player has filled in all their words.
    #[must_use]
    pub fn expected_size(player_count: usize, config: &EngineConfig) -> usize {
        player_count * config.words_per_player
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl From<Vec<String>> for WordPool {
    fn from(words: Vec<String>) -> Self {
        let mut pool = WordPool::new();
        pool.add_player_words(words);
        pool
    }
}
