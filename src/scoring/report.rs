//! Final results handed to the results screen.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::ledger::{GuessRecord, ScoreLedger};
use crate::core::{Team, TeamId};

/// How many words one player explained over the whole game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub name: String,
    pub team: String,
    pub guessed: u32,
}

/// Everything the results screen needs once the last round is cleared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    /// Final teams in turn order.
    pub teams: Vec<Team>,
    /// Team IDs ordered by total, best first.
    pub ranking: Vec<TeamId>,
    /// Full guess log, oldest first.
    pub log: Vec<GuessRecord>,
    /// Players ordered by words explained, best first.
    pub player_stats: Vec<PlayerStat>,
}

impl GameReport {
    #[must_use]
    pub fn from_ledger(ledger: &ScoreLedger) -> Self {
        let log: Vec<GuessRecord> = ledger.log().iter().cloned().collect();
        Self {
            teams: ledger.teams().values().cloned().collect(),
            ranking: ledger.ranking(),
            player_stats: player_stats(&log),
            log,
        }
    }

    /// Teams in ranking order.
    pub fn ranked_teams(&self) -> impl Iterator<Item = &Team> {
        self.ranking.iter().map(move |id| &self.teams[id.index()])
    }

    /// Every team sharing the best total. More than one means a tie.
    #[must_use]
    pub fn winners(&self) -> Vec<TeamId> {
        let Some(best) = self.ranking.first().map(|id| self.teams[id.index()].total()) else {
            return Vec::new();
        };
        self.ranking
            .iter()
            .copied()
            .take_while(|id| self.teams[id.index()].total() == best)
            .collect()
    }

    /// Player who explained the most words.
    #[must_use]
    pub fn top_player(&self) -> Option<&PlayerStat> {
        self.player_stats.first()
    }
}

/// Count guesses per explaining player.
///
/// Ties keep the order in which players first scored.
pub fn player_stats(log: &[GuessRecord]) -> Vec<PlayerStat> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut stats: Vec<PlayerStat> = Vec::new();

    for record in log {
        let slot = *index.entry(record.guessed_by.as_str()).or_insert_with(|| {
            stats.push(PlayerStat {
                name: record.guessed_by.clone(),
                team: record.team.clone(),
                guessed: 0,
            });
            stats.len() - 1
        });
        stats[slot].guessed += 1;
    }

    stats.sort_by(|a, b| b.guessed.cmp(&a.guessed));
    stats
}
