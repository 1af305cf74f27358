//! Inputs to the turn controller and what they caused.

use serde::{Deserialize, Serialize};

use crate::core::{Round, TeamId};
use crate::scoring::GameReport;

/// Something the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// Explainer pressed start.
    StartTurn,
    /// Team guessed the shown word.
    Guessed,
    /// One second elapsed on the game clock.
    Tick,
    /// Turn summary dismissed.
    NextTurn,
}

/// Events a player can trigger. Ticks only come from the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    StartTurn,
    Guessed,
    NextTurn,
}

impl From<PlayerAction> for GameEvent {
    fn from(action: PlayerAction) -> Self {
        match action {
            PlayerAction::StartTurn => GameEvent::StartTurn,
            PlayerAction::Guessed => GameEvent::Guessed,
            PlayerAction::NextTurn => GameEvent::NextTurn,
        }
    }
}

/// Outcome of applying one event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Clock started for `player` of `team`.
    TurnStarted {
        team: TeamId,
        player: String,
        time_left: u32,
        word: String,
    },
    /// Word guessed, more words remain.
    WordGuessed { word: String, remaining: usize },
    /// One second gone.
    Ticked { time_left: u32 },
    /// Clock hit zero; turn is over.
    TimeUp { team: TeamId, guessed: u32 },
    /// Team cleared the queue; next round waits to start with the same
    /// explainer.
    RoundAdvanced {
        team: TeamId,
        word: String,
        bonus: u32,
        next_round: Round,
    },
    /// Team cleared the last round.
    GameComplete {
        team: TeamId,
        word: String,
        bonus: u32,
        report: GameReport,
    },
    /// Device handed to the next team.
    TurnPassed { team: TeamId, player: String },
    /// Event has no effect in the current phase.
    Ignored,
}

impl Transition {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Transition::Ignored)
    }
}
