use std::sync::Arc;

use quiz_core::model::LeaderboardEntry;
use tracing::warn;

use crate::repository::{KeyValueStore, StorageError};

/// Storage key for the persisted leaderboard. Fixed so it never collides
/// with unrelated application state sharing the same backend.
pub const LEADERBOARD_KEY: &str = "number_classification_leaderboard";

/// Maximum number of retained high-score entries.
pub const MAX_ENTRIES: usize = 10;

/// Capped, rank-ordered high-score list on top of a key-value backend.
///
/// Failures never reach the caller: a broken or corrupted backend degrades to
/// a no-op `save` / empty `load` and is reported through the log, so a
/// storage problem can never block game completion.
#[derive(Clone)]
pub struct LeaderboardStore {
    store: Arc<dyn KeyValueStore>,
}

impl LeaderboardStore {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Append `entry`, re-rank by score descending (stable on ties), keep the
    /// top [`MAX_ENTRIES`], and persist the result.
    pub async fn save(&self, entry: LeaderboardEntry) {
        if let Err(err) = self.try_save(entry).await {
            warn!(error = %err, "failed to save leaderboard entry");
        }
    }

    /// The persisted entries in stored (rank) order; empty if nothing was
    /// persisted yet or the backend failed.
    pub async fn load(&self) -> Vec<LeaderboardEntry> {
        match self.try_load().await {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "failed to load leaderboard");
                Vec::new()
            }
        }
    }

    async fn try_save(&self, entry: LeaderboardEntry) -> Result<(), StorageError> {
        let mut entries = self.try_load().await?;
        entries.push(entry);

        // Stable sort: equal scores keep their insertion order.
        entries.sort_by(|a, b| b.score().cmp(&a.score()));
        entries.truncate(MAX_ENTRIES);

        let serialized = serde_json::to_string(&entries)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store.set(LEADERBOARD_KEY, &serialized).await
    }

    async fn try_load(&self) -> Result<Vec<LeaderboardEntry>, StorageError> {
        match self.store.get(LEADERBOARD_KEY).await? {
            None => Ok(Vec::new()),
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| StorageError::Serialization(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quiz_core::time::fixed_now;

    use crate::repository::InMemoryKeyValueStore;

    fn entry(name: &str, score: u32) -> LeaderboardEntry {
        LeaderboardEntry::new(name, score, fixed_now())
    }

    fn store_over(backend: impl KeyValueStore + 'static) -> LeaderboardStore {
        LeaderboardStore::new(Arc::new(backend))
    }

    #[tokio::test]
    async fn load_of_empty_store_is_empty() {
        let store = store_over(InMemoryKeyValueStore::new());
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn save_orders_by_score_descending() {
        let store = store_over(InMemoryKeyValueStore::new());
        store.save(entry("low", 30)).await;
        store.save(entry("high", 90)).await;
        store.save(entry("mid", 60)).await;

        let scores: Vec<u32> = store.load().await.iter().map(|e| e.score()).collect();
        assert_eq!(scores, [90, 60, 30]);
    }

    #[tokio::test]
    async fn cap_keeps_only_top_ten() {
        let store = store_over(InMemoryKeyValueStore::new());
        // 100, 90, ..., 0 — eleven entries.
        for i in 0..11u32 {
            store.save(entry(&format!("p{i}"), 100 - i * 10)).await;
        }

        let entries = store.load().await;
        assert_eq!(entries.len(), MAX_ENTRIES);
        let scores: Vec<u32> = entries.iter().map(|e| e.score()).collect();
        assert_eq!(scores, [100, 90, 80, 70, 60, 50, 40, 30, 20, 10]);
    }

    #[tokio::test]
    async fn ties_keep_insertion_order() {
        let store = store_over(InMemoryKeyValueStore::new());
        store.save(entry("first", 50)).await;
        store.save(entry("second", 50)).await;
        store.save(entry("third", 50)).await;

        let names: Vec<String> = store
            .load()
            .await
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn malformed_json_degrades_to_empty() {
        let backend = InMemoryKeyValueStore::new();
        backend.set(LEADERBOARD_KEY, "not json").await.unwrap();
        let store = store_over(backend);

        assert!(store.load().await.is_empty());
        // save over corrupted data is absorbed as a no-op.
        store.save(entry("Ada", 10)).await;
    }

    struct FailingStore;

    #[async_trait]
    impl KeyValueStore for FailingStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Connection("backend offline".into()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("backend offline".into()))
        }
    }

    #[tokio::test]
    async fn backend_failure_never_panics() {
        let store = store_over(FailingStore);
        store.save(entry("Ada", 10)).await;
        assert!(store.load().await.is_empty());
    }
}
