//! Read-only snapshot of the current turn for rendering.

use serde::{Deserialize, Serialize};

use super::controller::GameState;
use super::phase::TurnPhase;
use crate::core::{Round, TeamId};

/// What the screen shows right now.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnView {
    pub phase: TurnPhase,
    pub round: Round,
    pub team: TeamId,
    pub team_name: String,
    pub player: String,
    /// Only shown while the clock runs.
    pub word: Option<String>,
    /// Running clock while playing; otherwise the time the team's next turn
    /// starts with.
    pub seconds: u32,
    pub guessed_this_turn: u32,
    pub guessed_in_round: usize,
    pub remaining_in_round: usize,
}

impl TurnView {
    pub(crate) fn new(state: &GameState, pool_size: usize) -> Self {
        let team = state.turn.current_team;
        let phase = state.turn.phase;

        let (word, seconds) = match phase {
            TurnPhase::Playing => (
                state.round.queue().peek().ok().map(str::to_string),
                state.turn.time_left,
            ),
            TurnPhase::TurnEnd | TurnPhase::GameOver => (None, state.turn.time_left),
            TurnPhase::Waiting => (None, state.time_bank.time_for(team)),
        };

        Self {
            phase,
            round: state.round.round(),
            team,
            team_name: state.ledger.team(team).name.clone(),
            player: state.current_player().to_string(),
            word,
            seconds,
            guessed_this_turn: state.turn.guessed_this_turn,
            guessed_in_round: state.round.guessed(pool_size),
            remaining_in_round: state.round.queue().len(),
        }
    }
}
