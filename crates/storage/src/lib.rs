#![forbid(unsafe_code)]

pub mod leaderboard;
pub mod repository;
pub mod sqlite;

pub use leaderboard::{LEADERBOARD_KEY, LeaderboardStore, MAX_ENTRIES};
pub use repository::{InMemoryKeyValueStore, KeyValueStore, StorageError};
pub use sqlite::{SqliteInitError, SqliteKeyValueStore};
