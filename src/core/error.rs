//! Engine error type.
//!
//! Every failure in this crate is a missing or broken precondition. There is
//! no I/O in the engine, so there are no transient faults to retry.

use thiserror::Error;

/// Errors produced by setup helpers and the turn engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Engine started without a usable team composition or word pool.
    /// No game state is created when this is returned.
    #[error("Game not configured: {reason}")]
    NotConfigured { reason: String },

    /// A word was requested from an exhausted queue outside the
    /// round-exhaustion transition.
    #[error("Word queue is empty")]
    EmptyQueue,

    /// A configuration value is out of range.
    #[error("Invalid config `{field}`: {detail}")]
    InvalidConfig { field: &'static str, detail: String },

    /// Fewer players than the configured minimum.
    #[error("Need at least {required} players, got {actual}")]
    RosterTooSmall { required: usize, actual: usize },

    /// A player name appears twice in the roster.
    #[error("Duplicate player name: {name}")]
    DuplicatePlayer { name: String },

    /// A player name is empty after trimming.
    #[error("Player name must not be blank")]
    BlankPlayerName,

    /// Team sizes do not add up to the roster size.
    #[error("Team sizes add up to {actual} but roster has {expected} players")]
    TeamSizeMismatch { expected: usize, actual: usize },

    /// The session driving the engine has shut down.
    #[error("Game session closed")]
    SessionClosed,
}

impl EngineError {
    pub(crate) fn not_configured(reason: impl Into<String>) -> Self {
        EngineError::NotConfigured {
            reason: reason.into(),
        }
    }

    /// True for errors that send the user back to setup.
    #[must_use]
    pub fn is_setup_error(&self) -> bool {
        !matches!(self, EngineError::EmptyQueue | EngineError::SessionClosed)
    }
}
