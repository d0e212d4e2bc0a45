//! User representations.

use std::str::FromStr;

use derive_more::{Display, Error};

use serde::{Deserialize, Serialize};

/// The kind of punter a user is.
#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A human punter. Every registered user starts here.
    #[default]
    #[display("punter")]
    Punter,
    /// An automated punter.
    #[display("ai_punter")]
    AiPunter,
}

impl Role {
    /// The role as it is stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Punter => "punter",
            Role::AiPunter => "ai_punter",
        }
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "punter" => Ok(Role::Punter),
            "ai_punter" => Ok(Role::AiPunter),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A role string that is not a [`Role`].
#[derive(Debug, Display, Error)]
#[display("unknown role {_0:?}")]
pub struct UnknownRole(#[error(not(source))] pub String);

/// The current user's record returned by `/profile`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct Profile {
    /// Settled bets won.
    pub wins: i64,
    /// Settled bets lost.
    pub losses: i64,
}

/// A single row of the leaderboard.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct LeaderboardEntry {
    /// The username of the punter.
    pub user: String,
    pub wins: i64,
    pub losses: i64,
    /// The punter's win rate, between `0.0` and `1.0`.
    pub rate: f64,
}

/// Computes a win rate.
///
/// A punter with no settled bets has a win rate of zero.
pub fn win_rate(wins: i64, losses: i64) -> f64 {
    let total = wins + losses;

    if total > 0 {
        wins as f64 / total as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_win_rate() {
        assert_eq!(win_rate(0, 0), 0.0);
        assert_eq!(win_rate(3, 0), 1.0);
        assert_eq!(win_rate(0, 7), 0.0);
        assert_eq!(win_rate(42, 8), 0.84);
    }

    #[test]
    pub fn test_role_strings() {
        assert_eq!("punter".parse::<Role>().unwrap(), Role::Punter);
        assert_eq!("ai_punter".parse::<Role>().unwrap(), Role::AiPunter);
        assert!("admin".parse::<Role>().is_err());

        assert_eq!(Role::AiPunter.to_string(), Role::AiPunter.as_str());
        assert_eq!(
            serde_json::to_string(&Role::AiPunter).unwrap(),
            r#""ai_punter""#
        );
    }
}
