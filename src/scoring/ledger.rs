//! Scores, time bonuses, and the guess log.
//!
//! The ledger is the only writer of `Team::score` and `Team::time_bonus`.
//! The guess log is an `im::Vector` so cloning a game state for a
//! what-if step costs O(1) regardless of how long the game has run.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Round, Team, TeamId, TeamMap};

/// One successfully guessed word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub word: String,
    /// Player who was explaining.
    pub guessed_by: String,
    /// Team name.
    pub team: String,
    pub round: Round,
}

/// Team scores plus the append-only guess log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    teams: TeamMap<Team>,
    log: Vector<GuessRecord>,
}

impl ScoreLedger {
    #[must_use]
    pub fn new(teams: TeamMap<Team>) -> Self {
        Self {
            teams,
            log: Vector::new(),
        }
    }

    /// Log a guessed word and give the team one point.
    pub fn record_guess(&mut self, team: TeamId, word: &str, player: &str, round: Round) {
        let entry = &mut self.teams[team];
        entry.score += 1;
        debug!(team = %entry.name, player, word, score = entry.score, "guess recorded");

        self.log.push_back(GuessRecord {
            word: word.to_string(),
            guessed_by: player.to_string(),
            team: entry.name.clone(),
            round,
        });
    }

    /// Add leftover seconds to the team's bonus after it cleared a round.
    pub fn award_bonus(&mut self, team: TeamId, seconds: u32) {
        let entry = &mut self.teams[team];
        entry.time_bonus += seconds;
        debug!(team = %entry.name, seconds, time_bonus = entry.time_bonus, "time bonus awarded");
    }

    #[must_use]
    pub fn team(&self, team: TeamId) -> &Team {
        &self.teams[team]
    }

    #[must_use]
    pub fn teams(&self) -> &TeamMap<Team> {
        &self.teams
    }

    #[must_use]
    pub fn team_count(&self) -> usize {
        self.teams.team_count()
    }

    /// Every guess so far, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<GuessRecord> {
        &self.log
    }

    /// Guesses made in one round.
    pub fn guesses_in(&self, round: Round) -> impl Iterator<Item = &GuessRecord> {
        self.log.iter().filter(move |r| r.round == round)
    }

    /// Teams ordered by `score + time_bonus`, best first.
    ///
    /// Equal totals keep turn order.
    #[must_use]
    pub fn ranking(&self) -> Vec<TeamId> {
        let mut ids: Vec<TeamId> = TeamId::all(self.teams.team_count()).collect();
        ids.sort_by(|a, b| self.teams[*b].total().cmp(&self.teams[*a].total()));
        ids
    }
}
