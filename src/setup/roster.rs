//! Player roster entry.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// Ordered list of distinct, non-blank player names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<String>,
}

impl Roster {
    /// Validate and trim a list of names.
    ///
    /// Names are compared after trimming, so `"Ann"` and `" Ann "` collide.
    pub fn new<I, S>(names: I, min_players: usize) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut players = Vec::new();

        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(EngineError::BlankPlayerName);
            }
            if !seen.insert(name.to_string()) {
                return Err(EngineError::DuplicatePlayer {
                    name: name.to_string(),
                });
            }
            players.push(name.to_string());
        }

        if players.len() < min_players {
            return Err(EngineError::RosterTooSmall {
                required: min_players,
                actual: players.len(),
            });
        }

        Ok(Self { players })
    }

    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.players
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
