//! Per-team clock carry-over.
//!
//! A team that clears the hat early keeps its leftover seconds for its next
//! turn, even when that turn falls in the following round. A team whose clock
//! ran out starts its next turn with a full clock.

use serde::{Deserialize, Serialize};

use crate::core::{TeamId, TeamMap};

/// Remaining seconds per team. `0` means "nothing banked".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamTimeBank {
    round_time: u32,
    seconds: TeamMap<u32>,
}

impl TeamTimeBank {
    /// Empty bank for `team_count` teams with a `round_time` second clock.
    #[must_use]
    pub fn new(team_count: usize, round_time: u32) -> Self {
        Self {
            round_time,
            seconds: TeamMap::with_value(team_count, 0),
        }
    }

    /// Seconds the team's next turn starts with.
    #[must_use]
    pub fn time_for(&self, team: TeamId) -> u32 {
        match self.seconds[team] {
            0 => self.round_time,
            banked => banked,
        }
    }

    /// Overwrite the team's entry. Other teams are untouched.
    pub fn store(&mut self, team: TeamId, seconds: u32) {
        self.seconds[team] = seconds.min(self.round_time);
    }

    /// Raw stored value, `0` when nothing is banked.
    #[must_use]
    pub fn stored(&self, team: TeamId) -> u32 {
        self.seconds[team]
    }

    #[must_use]
    pub fn round_time(&self) -> u32 {
        self.round_time
    }
}
