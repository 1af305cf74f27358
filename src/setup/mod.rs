//! Pre-game setup: roster, team split, and team formation.
//!
//! These produce the inputs the turn engine consumes. They are kept free of
//! any presentation concerns.

pub mod roster;
pub mod teams;

pub use roster::Roster;
pub use teams::{form_teams, team_name, team_size_options, TeamSizeOption, TEAM_NAMES};
