use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single persisted high-score record.
///
/// `date` serializes as an RFC 3339 timestamp, which is what the persisted
/// leaderboard JSON carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    name: String,
    score: u32,
    date: DateTime<Utc>,
}

impl LeaderboardEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, score: u32, date: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            score,
            date,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
}
