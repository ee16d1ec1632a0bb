//! Persistence tests.
//!
//! Boards written through one store must be readable after the database is
//! closed and reopened.

use discussion_board::{Database, DiscussionStore, SqliteBlobStore};
use tempfile::TempDir;

#[tokio::test]
async fn test_board_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("discussion.db");

    let (entry_id, kept_reply_id) = {
        let db = Database::open(&path).await.unwrap();
        let store = DiscussionStore::new(SqliteBlobStore::from_database(&db));

        let entry = store
            .post_entry("discussion", "alice", "persist me")
            .await
            .unwrap();
        let dropped = store
            .post_reply("discussion", &entry.id, "bob", "dropped")
            .await
            .unwrap();
        let kept = store
            .post_reply("discussion", &entry.id, "carol", "kept")
            .await
            .unwrap();
        store
            .delete_reply("discussion", &entry.id, &dropped.id)
            .await
            .unwrap();

        db.close().await;
        (entry.id, kept.id)
    };

    let db = Database::open(&path).await.unwrap();
    let store = DiscussionStore::new(SqliteBlobStore::from_database(&db));

    let entries = store.list_entries("discussion").await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, entry_id);
    assert_eq!(entries[0].author, "alice");
    assert_eq!(entries[0].body, "persist me");
    assert_eq!(entries[0].replies.len(), 1);
    assert_eq!(entries[0].replies[0].id, kept_reply_id);

    db.close().await;
}

#[tokio::test]
async fn test_reopen_keeps_schema_version() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("discussion.db");

    let first = Database::open(&path).await.unwrap();
    let version = first.schema_version().await.unwrap();
    first.close().await;

    let second = Database::open(&path).await.unwrap();
    assert_eq!(second.schema_version().await.unwrap(), version);
    second.close().await;
}

#[tokio::test]
async fn test_unknown_board_is_empty_after_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("discussion.db");

    {
        let db = Database::open(&path).await.unwrap();
        let store = DiscussionStore::new(SqliteBlobStore::from_database(&db));
        store.post_entry("a", "alice", "only in a").await.unwrap();
        db.close().await;
    }

    let db = Database::open(&path).await.unwrap();
    let store = DiscussionStore::new(SqliteBlobStore::from_database(&db));
    assert_eq!(store.list_entries("a").await.unwrap().len(), 1);
    assert!(store.list_entries("b").await.unwrap().is_empty());
    db.close().await;
}
