//! The three presentation modes, one per round.

use serde::{Deserialize, Serialize};

/// A round of the game. Each round replays the full word pool with a
/// different rule for how the explaining player may present a word.
///
/// Serialized as its round number, 1 to 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Round {
    /// Explain with any words except ones sharing the root.
    Describe,
    /// Act it out with gestures, no sounds.
    Charades,
    /// Say a single association word.
    OneWord,
}

impl Round {
    /// All rounds in play order.
    pub const ALL: [Round; 3] = [Round::Describe, Round::Charades, Round::OneWord];

    /// Round for a 1-based round number.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Round::Describe),
            2 => Some(Round::Charades),
            3 => Some(Round::OneWord),
            _ => None,
        }
    }

    /// 1-based round number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Round::Describe => 1,
            Round::Charades => 2,
            Round::OneWord => 3,
        }
    }

    /// The round after this one, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Round::Describe => "Describe",
            Round::Charades => "Charades",
            Round::OneWord => "One word",
        }
    }

    /// Rule shown to the explaining player.
    #[must_use]
    pub const fn rule(self) -> &'static str {
        match self {
            Round::Describe => "Explain the word in any words except ones with the same root",
            Round::Charades => "Show it with gestures, no sounds",
            Round::OneWord => "Say just one association word",
        }
    }
}

impl From<Round> for u8 {
    fn from(round: Round) -> Self {
        round.number()
    }
}

impl TryFrom<u8> for Round {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Round::from_number(number).ok_or_else(|| format!("no round numbered {number}"))
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round {}: {}", self.number(), self.name())
    }
}
