//! Engine configuration.
//!
//! Hosts configure the engine at startup. Every tunable that the game rules
//! mention (turn length, number of rounds, roster minimum, words per player,
//! clock resolution) lives here instead of in literals.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::EngineError;
use super::round::Round;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seconds on the clock for a fresh turn (default: 60).
    pub round_time: u32,

    /// Number of rounds played (default: 3). At most one per [`Round`] mode.
    pub round_count: u8,

    /// Smallest roster that can start a game (default: 4).
    pub min_players: usize,

    /// Words each player puts into the hat (default: 5).
    pub words_per_player: usize,

    /// Real time between clock ticks (default: 1s).
    /// Each tick removes one second from the turn regardless of this value.
    pub tick_interval: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            round_time: 60,
            round_count: 3,
            min_players: 4,
            words_per_player: 5,
            tick_interval: Duration::from_secs(1),
        }
    }
}

impl EngineConfig {
    /// Set the turn length in seconds.
    #[must_use]
    pub fn with_round_time(mut self, seconds: u32) -> Self {
        self.round_time = seconds;
        self
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_round_count(mut self, rounds: u8) -> Self {
        self.round_count = rounds;
        self
    }

    /// Set the minimum roster size.
    #[must_use]
    pub fn with_min_players(mut self, players: usize) -> Self {
        self.min_players = players;
        self
    }

    /// Set how many words each player contributes.
    #[must_use]
    pub fn with_words_per_player(mut self, words: usize) -> Self {
        self.words_per_player = words;
        self
    }

    /// Set the real-time tick interval.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// The round whose exhaustion ends the game.
    ///
    /// Only meaningful after [`validate`](Self::validate) succeeded.
    #[must_use]
    pub fn last_round(&self) -> Round {
        Round::from_number(self.round_count).unwrap_or(Round::OneWord)
    }

    /// Check every field is in range.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.round_time == 0 {
            return Err(EngineError::InvalidConfig {
                field: "round_time",
                detail: "must be at least 1 second".to_string(),
            });
        }
        if Round::from_number(self.round_count).is_none() {
            return Err(EngineError::InvalidConfig {
                field: "round_count",
                detail: format!("must be between 1 and {}, got {}", Round::ALL.len(), self.round_count),
            });
        }
        if self.min_players < 2 {
            return Err(EngineError::InvalidConfig {
                field: "min_players",
                detail: "a game needs at least 2 players".to_string(),
            });
        }
        if self.words_per_player == 0 {
            return Err(EngineError::InvalidConfig {
                field: "words_per_player",
                detail: "must be at least 1".to_string(),
            });
        }
        if self.tick_interval.is_zero() {
            return Err(EngineError::InvalidConfig {
                field: "tick_interval",
                detail: "must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.round_time, 60);
        assert_eq!(config.round_count, 3);
        assert_eq!(config.min_players, 4);
        assert_eq!(config.words_per_player, 5);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert_eq!(config.last_round(), Round::OneWord);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::default()
            .with_round_time(30)
            .with_round_count(2)
            .with_min_players(6)
            .with_words_per_player(3)
            .with_tick_interval(Duration::from_millis(10));

        assert_eq!(config.round_time, 30);
        assert_eq!(config.last_round(), Round::Charades);
        assert_eq!(config.min_players, 6);
        assert_eq!(config.words_per_player, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let bad = [
            (EngineConfig::default().with_round_time(0), "round_time"),
            (EngineConfig::default().with_round_count(0), "round_count"),
            (EngineConfig::default().with_round_count(4), "round_count"),
            (EngineConfig::default().with_min_players(1), "min_players"),
            (EngineConfig::default().with_words_per_player(0), "words_per_player"),
            (EngineConfig::default().with_tick_interval(Duration::ZERO), "tick_interval"),
        ];

        for (config, expected_field) in bad {
            match config.validate() {
                Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, expected_field),
                other => panic!("expected InvalidConfig for {expected_field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"round_time": 45}"#).unwrap();
        assert_eq!(config.round_time, 45);
        assert_eq!(config.round_count, 3);
    }
}
