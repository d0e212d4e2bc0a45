//! Leaderboard query parameters.

use serde::{Deserialize, Serialize};

/// Query string for `/leaderboard`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LeaderboardQuery {
    /// The kind of punter to show.
    ///
    /// Use [`LeaderboardQuery::filter`] to interpret it.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl LeaderboardQuery {
    /// The filter to apply.
    ///
    /// Anything other than `ai` or `human` shows everyone.
    pub fn filter(&self) -> Option<PunterKind> {
        match self.kind.as_deref() {
            Some("ai") => Some(PunterKind::Ai),
            Some("human") => Some(PunterKind::Human),
            _ => None,
        }
    }
}

/// A leaderboard filter.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PunterKind {
    /// Only AI punters.
    Ai,
    /// Everyone but AI punters.
    Human,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(kind: Option<&str>) -> LeaderboardQuery {
        LeaderboardQuery {
            kind: kind.map(str::to_owned),
        }
    }

    #[test]
    pub fn test_filter() {
        assert_eq!(query(Some("ai")).filter(), Some(PunterKind::Ai));
        assert_eq!(query(Some("human")).filter(), Some(PunterKind::Human));
        assert_eq!(query(None).filter(), None);
        assert_eq!(query(Some("")).filter(), None);
        assert_eq!(query(Some("AI")).filter(), None);
        assert_eq!(query(Some("robots")).filter(), None);
    }
}
