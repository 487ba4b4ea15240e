#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use visitor_core::{CounterStore, COUNTER_ATTRIBUTE, COUNTER_KEY};
use visitor_gateway::config::{StorageBackend, StorageSection};
use visitor_gateway::counter::increment_visits;
use visitor_gateway::storage::{self, SqliteStore};

const TABLE: &str = "visitor-count";

#[tokio::test]
async fn upserts_from_zero_and_counts_up() {
    let store = SqliteStore::in_memory(TABLE).unwrap();

    for expected in 1..=3 {
        assert_eq!(increment_visits(&store, TABLE).await.unwrap(), expected);
    }

    let updated = store.add(TABLE, COUNTER_KEY, COUNTER_ATTRIBUTE, 10).await.unwrap();
    assert_eq!(updated[COUNTER_ATTRIBUTE].to_i64().unwrap(), 13);
}

#[tokio::test]
async fn counter_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("visits.db");

    {
        let store = SqliteStore::open(&path, TABLE).unwrap();
        increment_visits(&store, TABLE).await.unwrap();
        increment_visits(&store, TABLE).await.unwrap();
    }

    let store = SqliteStore::open(&path, TABLE).unwrap();
    assert_eq!(increment_visits(&store, TABLE).await.unwrap(), 3);
}

#[tokio::test]
async fn concurrent_increments_are_not_lost() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = StorageSection {
        backend: StorageBackend::Sqlite,
        path: dir.path().join("visits.db").to_string_lossy().into_owned(),
        table_name: TABLE.to_string(),
    };
    let store: Arc<dyn CounterStore> = storage::open(&cfg).unwrap();
    assert_eq!(store.backend(), "sqlite");

    let mut tasks = Vec::new();
    for _ in 0..32 {
        let store = Arc::clone(&store);
        tasks.push(tokio::spawn(async move {
            increment_visits(store.as_ref(), TABLE).await.unwrap()
        }));
    }
    for t in tasks {
        t.await.unwrap();
    }

    assert_eq!(increment_visits(store.as_ref(), TABLE).await.unwrap(), 33);
}

#[tokio::test]
async fn missing_table_is_a_storage_error() {
    let store = SqliteStore::in_memory(TABLE).unwrap();
    let err = increment_visits(&store, "other-table").await.expect_err("must fail");
    assert_eq!(err.code().as_str(), "STORAGE");
    assert!(err.to_string().contains("no such table"));
}
