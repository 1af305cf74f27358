//! Scoring: per-team time carry-over, score ledger, and final report.

pub mod time_bank;
pub mod ledger;
pub mod report;

pub use time_bank::TeamTimeBank;
pub use ledger::{GuessRecord, ScoreLedger};
pub use report::{player_stats, GameReport, PlayerStat};
