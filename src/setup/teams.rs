//! Team-size choices and random team formation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::info;

use super::roster::Roster;
use crate::core::{fisher_yates, EngineError, Team, TeamMap};

/// Team names, assigned in turn order. Repeats get a numeric suffix.
pub const TEAM_NAMES: [&str; 6] = ["Purple", "Pink", "Blue", "Green", "Orange", "Pastel"];

/// One way to split the roster into teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSizeOption {
    pub team_count: usize,
    pub players_per_team: usize,
    /// The first `remainder` teams get one extra player.
    pub remainder: usize,
}

impl TeamSizeOption {
    /// Size of each team in turn order.
    #[must_use]
    pub fn sizes(&self) -> SmallVec<[usize; 8]> {
        (0..self.team_count)
            .map(|i| self.players_per_team + usize::from(i < self.remainder))
            .collect()
    }
}

/// Every split with at least two teams of at least two players.
///
/// ```
/// use hat_engine::setup::team_size_options;
///
/// let options = team_size_options(5);
/// assert_eq!(options.len(), 1);
/// assert_eq!(options[0].sizes().as_slice(), &[3, 2]);
/// ```
#[must_use]
pub fn team_size_options(player_count: usize) -> Vec<TeamSizeOption> {
    (2..=player_count / 2)
        .map(|team_count| TeamSizeOption {
            team_count,
            players_per_team: player_count / team_count,
            remainder: player_count % team_count,
        })
        .filter(|option| option.players_per_team >= 2)
        .collect()
}

/// Display name for the team at `index`.
#[must_use]
pub fn team_name(index: usize) -> String {
    let base = TEAM_NAMES[index % TEAM_NAMES.len()];
    match index / TEAM_NAMES.len() {
        0 => base.to_string(),
        lap => format!("{} {}", base, lap + 1),
    }
}

/// Shuffle the roster and deal players into teams of the given sizes.
pub fn form_teams<R: Rng + ?Sized>(
    roster: &Roster,
    sizes: &[usize],
    rng: &mut R,
) -> Result<TeamMap<Team>, EngineError> {
    let total: usize = sizes.iter().sum();
    if total != roster.len() {
        return Err(EngineError::TeamSizeMismatch {
            expected: roster.len(),
            actual: total,
        });
    }
    if sizes.is_empty() || sizes.contains(&0) {
        return Err(EngineError::not_configured("every team needs at least one player"));
    }

    let mut shuffled = roster.players().to_vec();
    fisher_yates(&mut shuffled, rng);

    let mut remaining = shuffled.into_iter();
    let teams: Vec<Team> = sizes
        .iter()
        .enumerate()
        .map(|(i, &size)| Team::new(team_name(i), remaining.by_ref().take(size).collect()))
        .collect();

    info!(teams = teams.len(), players = roster.len(), "teams formed");
    Ok(TeamMap::from_vec(teams))
}
