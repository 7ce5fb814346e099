//! Repository Integration Tests
//!
//! Tests for the key-value stores with in-memory and on-disk SQLite.

use crate::repository::{KeyValueStore, MemoryStore, SqliteStore};

#[tokio::test]
async fn test_missing_key_is_none() {
    let store = SqliteStore::open_in_memory().expect("Failed to open test DB");
    assert_eq!(store.get("favorites").await.unwrap(), None);
}

#[tokio::test]
async fn test_set_overwrites() {
    let store = SqliteStore::open_in_memory().unwrap();

    store.set("favorites", "[]").await.unwrap();
    store.set("favorites", r#"[{"name":"Vanda"}]"#).await.unwrap();

    let value = store.get("favorites").await.unwrap();
    assert_eq!(value.as_deref(), Some(r#"[{"name":"Vanda"}]"#));
}

#[tokio::test]
async fn test_remove() {
    let store = SqliteStore::open_in_memory().unwrap();

    store.set("favorites", "[]").await.unwrap();
    store.remove("favorites").await.unwrap();
    store.remove("favorites").await.expect("Removing a missing key should succeed");

    assert_eq!(store.get("favorites").await.unwrap(), None);
}

#[tokio::test]
async fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("orchids.db");

    {
        let store = SqliteStore::open(&db_path).expect("Failed to open DB file");
        store.set("favorites", "[1]").await.unwrap();
    }

    let reopened = SqliteStore::open(&db_path).unwrap();
    assert_eq!(reopened.get("favorites").await.unwrap().as_deref(), Some("[1]"));
}

#[tokio::test]
async fn test_memory_store() {
    let store = MemoryStore::new();
    assert_eq!(store.get("a").await.unwrap(), None);

    store.set("a", "1").await.unwrap();
    store.set("a", "2").await.unwrap();
    assert_eq!(store.get("a").await.unwrap().as_deref(), Some("2"));

    store.remove("a").await.unwrap();
    assert_eq!(store.get("a").await.unwrap(), None);
}
