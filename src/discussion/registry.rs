//! Board addressing.
//!
//! Maps a board name to the single [`BoardInstance`] that serializes every
//! operation on that board. Instances are created lazily and live for the
//! lifetime of the registry.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard, RwLock};

/// Prefix of the storage key owned by each board.
const STORAGE_KEY_PREFIX: &str = "board:";

/// The serialization unit of one named board.
#[derive(Debug)]
pub struct BoardInstance {
    name: String,
    storage_key: String,
    turn: Mutex<()>,
}

impl BoardInstance {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            storage_key: format!("{STORAGE_KEY_PREFIX}{name}"),
            turn: Mutex::new(()),
        }
    }

    /// Board name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Storage key holding this board's serialized state.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Wait for this board's turn.
    ///
    /// Waiters are served in arrival order; the turn is held until the guard
    /// is dropped.
    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.turn.lock().await
    }
}

/// Registry of board instances, indexed by name.
#[derive(Debug, Default)]
pub struct BoardRegistry {
    boards: RwLock<HashMap<String, Arc<BoardInstance>>>,
}

impl BoardRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a board name to its instance, creating it on first use.
    pub async fn resolve(&self, name: &str) -> Arc<BoardInstance> {
        if let Some(instance) = self.boards.read().await.get(name) {
            return Arc::clone(instance);
        }

        let mut boards = self.boards.write().await;
        let instance = boards.entry(name.to_string()).or_insert_with(|| {
            tracing::debug!(board = %name, "Creating board instance");
            Arc::new(BoardInstance::new(name))
        });
        Arc::clone(instance)
    }

    /// Number of boards resolved so far.
    pub async fn board_count(&self) -> usize {
        self.boards.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_same_name_same_instance() {
        let registry = BoardRegistry::new();
        let a1 = registry.resolve("a").await;
        let a2 = registry.resolve("a").await;

        assert!(Arc::ptr_eq(&a1, &a2));
        assert_eq!(registry.board_count().await, 1);
    }

    #[tokio::test]
    async fn test_different_names_different_instances() {
        let registry = BoardRegistry::new();
        let a = registry.resolve("a").await;
        let b = registry.resolve("b").await;

        assert!(!Arc::ptr_eq(&a, &b));
        assert_ne!(a.storage_key(), b.storage_key());
        assert_eq!(registry.board_count().await, 2);
    }

    #[tokio::test]
    async fn test_storage_key() {
        let registry = BoardRegistry::new();
        let board = registry.resolve("discussion").await;
        assert_eq!(board.name(), "discussion");
        assert_eq!(board.storage_key(), "board:discussion");
    }

    #[tokio::test]
    async fn test_concurrent_resolve_yields_one_instance() {
        let registry = Arc::new(BoardRegistry::new());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = Arc::clone(&registry);
                tokio::spawn(async move { registry.resolve("shared").await })
            })
            .collect();

        let mut instances = Vec::new();
        for handle in handles {
            instances.push(handle.await.unwrap());
        }

        assert!(instances.iter().all(|i| Arc::ptr_eq(i, &instances[0])));
        assert_eq!(registry.board_count().await, 1);
    }

    #[tokio::test]
    async fn test_turn_blocks_same_board_only() {
        let registry = BoardRegistry::new();
        let a = registry.resolve("a").await;
        let b = registry.resolve("b").await;

        let _held = a.acquire().await;

        let other_board = tokio::time::timeout(Duration::from_millis(100), b.acquire()).await;
        assert!(other_board.is_ok());

        let same_board = tokio::time::timeout(Duration::from_millis(50), a.acquire()).await;
        assert!(same_board.is_err());
    }
}
