//! Key/value blob storage for serialized boards.
//!
//! The store treats durable storage as an opaque key to bytes map. Each
//! board owns exactly one key.

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::RwLock;

use crate::db::{Database, DbPool};
use crate::Result;

/// Durable key/value storage backend.
///
/// Implementations must make `put` replace the whole value atomically.
pub trait BlobStore: Send + Sync + 'static {
    /// Read the value stored under `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Vec<u8>>>> + Send;

    /// Write `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &[u8]) -> impl Future<Output = Result<()>> + Send;
}

/// SQLite-backed blob storage (`board_state` table).
#[derive(Debug, Clone)]
pub struct SqliteBlobStore {
    pool: DbPool,
}

impl SqliteBlobStore {
    /// Create a blob store on top of an existing pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a blob store sharing the pool of an opened database.
    pub fn from_database(db: &Database) -> Self {
        Self::new(db.pool().clone())
    }
}

impl BlobStore for SqliteBlobStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value: Option<Vec<u8>> =
            sqlx::query_scalar("SELECT value FROM board_state WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(value)
    }

    async fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        sqlx::query(
            "INSERT INTO board_state (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

/// In-memory blob storage, for tests and throwaway runs.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    values: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys written so far.
    pub async fn key_count(&self) -> usize {
        self.values.read().await.len()
    }
}

impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
