//! # hat-engine
//!
//! Turn and round engine for "the hat", a party word-guessing game played by
//! teams sharing one device.
//!
//! ## Rules in brief
//!
//! - Every player puts words into the hat. The whole pool is played three
//!   times: described freely, acted out, then hinted with a single word.
//! - Teams take turns. One player explains while the clock runs; each
//!   guessed word is a point.
//! - A team that empties the hat keeps its leftover seconds twice over: they
//!   are added to its time bonus, and its next turn starts with them.
//!   A team whose clock runs out starts its next turn fresh.
//!
//! ## Design Principles
//!
//! 1. **Owned state, explicit transitions**: one `GameState` per session,
//!    changed only by `HatGame::apply` (or copied by `HatGame::step`).
//!
//! 2. **Deterministic**: word and team shuffles draw from a seeded
//!    `GameRng`, so games replay exactly in tests.
//!
//! 3. **Clock outside the rules**: `GameClock` only emits ticks. Whether a
//!    tick ends the turn is the controller's decision.
//!
//! ## Modules
//!
//! - `core`: team IDs, rounds, RNG, configuration, errors
//! - `setup`: roster, team-size options, team formation
//! - `words`: word pool collection and per-round queue
//! - `scoring`: time bank, score ledger, final report
//! - `turns`: phase state machine and round progression
//! - `clock`: real-time tick source and async session loop

pub mod core;
pub mod setup;
pub mod words;
pub mod scoring;
pub mod turns;
pub mod clock;

// Re-export commonly used types
pub use crate::core::{EngineConfig, EngineError, GameRng, Round, Team, TeamId, TeamMap};

pub use crate::setup::{form_teams, team_size_options, Roster, TeamSizeOption};

pub use crate::words::{shuffle_words, QueueStatus, WordPool, WordQueue};

pub use crate::scoring::{GameReport, GuessRecord, PlayerStat, ScoreLedger, TeamTimeBank};

pub use crate::turns::{
    GameEvent, GameState, HatGame, HatGameBuilder, PlayerAction, RoundOutcome, RoundState,
    Transition, TurnPhase, TurnState, TurnView,
};

pub use crate::clock::{ClockTick, GameClock, GameSession, SessionUpdate};
