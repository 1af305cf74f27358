//! Team identification, per-team data storage, and the team record itself.
//!
//! ## TeamId
//!
//! Type-safe team identifier. Turn order follows team index.
//!
//! ## TeamMap
//!
//! Per-team data storage backed by `Vec` for O(1) access, indexed by `TeamId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Team identifier supporting 1-255 teams.
///
/// Team indices are 0-based: the first team to play is `TeamId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw team index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The team that plays after this one, wrapping around.
    #[must_use]
    pub fn next(self, team_count: usize) -> Self {
        Self(((self.index() + 1) % team_count) as u8)
    }

    /// Iterate over all team IDs for a game with `team_count` teams.
    ///
    /// ```
    /// use hat_engine::core::TeamId;
    ///
    /// let teams: Vec<_> = TeamId::all(3).collect();
    /// assert_eq!(teams, vec![TeamId::new(0), TeamId::new(1), TeamId::new(2)]);
    /// ```
    pub fn all(team_count: usize) -> impl Iterator<Item = TeamId> {
        (0..team_count as u8).map(TeamId)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// Per-team data storage with O(1) access.
///
/// ```
/// use hat_engine::core::{TeamId, TeamMap};
///
/// let mut seconds: TeamMap<u32> = TeamMap::with_value(2, 60);
/// seconds[TeamId::new(1)] = 45;
/// assert_eq!(seconds[TeamId::new(0)], 60);
/// assert_eq!(seconds[TeamId::new(1)], 45);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: Vec<T>,
}

impl<T> TeamMap<T> {
    /// Create a new TeamMap with values from a factory function.
    pub fn new(team_count: usize, factory: impl Fn(TeamId) -> T) -> Self {
        assert!(team_count > 0, "Must have at least 1 team");
        assert!(team_count <= 255, "At most 255 teams supported");

        let data = (0..team_count as u8).map(|i| factory(TeamId(i))).collect();

        Self { data }
    }

    /// Create a new TeamMap with all entries set to the same value.
    pub fn with_value(team_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(team_count, |_| value.clone())
    }

    /// Wrap an existing vector, one entry per team in turn order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 team");
        assert!(data.len() <= 255, "At most 255 teams supported");
        Self { data }
    }

    /// Get the number of teams.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: TeamId) -> &T {
        &self.data[team.index()]
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: TeamId) -> &mut T {
        &mut self.data[team.index()]
    }

    /// Iterate over (TeamId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (TeamId(i as u8), v))
    }

    /// Iterate over values in team order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Consume the map, returning values in team order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Index<TeamId> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamId) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<TeamId> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamId) -> &mut Self::Output {
        self.get_mut(team)
    }
}

/// A team as produced by team formation.
///
/// `score` and `time_bonus` start at zero and are only changed by the
/// score ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique display label.
    pub name: String,
    /// Players in explaining order.
    pub players: Vec<String>,
    /// One point per guessed word.
    pub score: u32,
    /// Seconds left over each time this team cleared a round.
    pub time_bonus: u32,
}

impl Team {
    /// Create a fresh team with zero score.
    pub fn new(name: impl Into<String>, players: Vec<String>) -> Self {
        Self {
            name: name.into(),
            players,
            score: 0,
            time_bonus: 0,
        }
    }

    /// Score used for the final ranking.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.score + self.time_bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_next_wraps() {
        assert_eq!(TeamId::new(0).next(3), TeamId::new(1));
        assert_eq!(TeamId::new(2).next(3), TeamId::new(0));
        assert_eq!(TeamId::new(0).next(1), TeamId::new(0));
        assert_eq!(format!("{}", TeamId::new(1)), "Team 1");
    }

    #[test]
    fn test_team_map_new_and_index() {
        let map: TeamMap<usize> = TeamMap::new(3, |t| t.index() * 10);
        assert_eq!(map[TeamId::new(0)], 0);
        assert_eq!(map[TeamId::new(2)], 20);
        assert_eq!(map.team_count(), 3);
    }

    #[test]
    fn test_team_map_from_vec_keeps_order() {
        let map = TeamMap::from_vec(vec!["a", "b"]);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(TeamId::new(0), &"a"), (TeamId::new(1), &"b")]);
        assert_eq!(map.into_vec(), vec!["a", "b"]);
    }

    #[test]
    fn test_team_map_serialization() {
        let map: TeamMap<u32> = TeamMap::new(2, |t| t.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let back: TeamMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 team")]
    fn test_team_map_zero_teams() {
        let _: TeamMap<u32> = TeamMap::with_value(0, 0);
    }

    #[test]
    fn test_team_total() {
        let mut team = Team::new("Purple", vec!["Ann".into(), "Bob".into()]);
        assert_eq!(team.total(), 0);
        team.score = 7;
        team.time_bonus = 12;
        assert_eq!(team.total(), 19);
    }
}
