use std::sync::Arc;

use quiz_core::model::LeaderboardEntry;
use quiz_core::time::fixed_now;
use storage::leaderboard::LeaderboardStore;
use storage::repository::KeyValueStore;
use storage::sqlite::SqliteKeyValueStore;

#[tokio::test]
async fn sqlite_kv_round_trips_and_overwrites() {
    let store = SqliteKeyValueStore::connect("sqlite:file:memdb_kv?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("migrate");

    assert!(store.get("missing").await.unwrap().is_none());

    store.set("greeting", "hello").await.unwrap();
    assert_eq!(
        store.get("greeting").await.unwrap().as_deref(),
        Some("hello")
    );

    store.set("greeting", "hola").await.unwrap();
    assert_eq!(store.get("greeting").await.unwrap().as_deref(), Some("hola"));
}

#[tokio::test]
async fn leaderboard_persists_through_sqlite() {
    let backend =
        SqliteKeyValueStore::connect("sqlite:file:memdb_leaderboard?mode=memory&cache=shared")
            .await
            .expect("connect");
    backend.migrate().await.expect("migrate");

    let store = LeaderboardStore::new(Arc::new(backend.clone()));
    store
        .save(LeaderboardEntry::new("Ada", 120, fixed_now()))
        .await;
    store
        .save(LeaderboardEntry::new("Alan", 150, fixed_now()))
        .await;

    // Re-open over the same database to prove the data survived the store.
    let reopened = LeaderboardStore::new(Arc::new(backend));
    let entries = reopened.load().await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name(), "Alan");
    assert_eq!(entries[0].score(), 150);
    assert_eq!(entries[1].name(), "Ada");
}
