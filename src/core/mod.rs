//! Core engine types: team IDs, rounds, RNG, configuration, errors.
//!
//! Everything here is independent of turn sequencing and is shared by the
//! setup helpers, the word queue, the score ledger, and the controller.

pub mod team;
pub mod round;
pub mod rng;
pub mod config;
pub mod error;

pub use team::{Team, TeamId, TeamMap};
pub use round::Round;
pub use rng::{fisher_yates, GameRng};
pub use config::EngineConfig;
pub use error::EngineError;
