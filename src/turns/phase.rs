//! Turn phase and rotation state.

use serde::{Deserialize, Serialize};

use crate::core::{TeamId, TeamMap};

/// Where the current turn is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Device is being passed to the next explainer.
    Waiting,
    /// Clock is running and words are shown.
    Playing,
    /// Clock ran out; showing the turn summary.
    TurnEnd,
    /// The last round was cleared. No further transitions.
    GameOver,
}

impl TurnPhase {
    /// The clock only runs in this phase.
    #[must_use]
    pub fn clock_running(self) -> bool {
        self == TurnPhase::Playing
    }
}

/// Whose turn it is and how it is going.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub phase: TurnPhase,
    pub current_team: TeamId,
    /// Next explainer within each team. Advanced only for the team that
    /// just played.
    pub player_index: TeamMap<usize>,
    /// Seconds left on the running clock.
    pub time_left: u32,
    /// Words guessed since the turn started.
    pub guessed_this_turn: u32,
}

impl TurnState {
    /// First team, first player of every team, waiting to start.
    #[must_use]
    pub fn new(team_count: usize) -> Self {
        Self {
            phase: TurnPhase::Waiting,
            current_team: TeamId::new(0),
            player_index: TeamMap::with_value(team_count, 0),
            time_left: 0,
            guessed_this_turn: 0,
        }
    }

    /// Move the team's explainer along, wrapping at `player_count`.
    pub fn rotate_player(&mut self, team: TeamId, player_count: usize) {
        let index = &mut self.player_index[team];
        *index = (*index + 1) % player_count;
    }
}
