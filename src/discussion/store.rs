//! Discussion store.
//!
//! Owns every board's persisted state. Each operation runs inside its
//! board's turn and performs one load → mutate → persist cycle over the
//! whole serialized board, so two operations on the same board never
//! interleave and no update is lost. Operations on different boards do
//! not contend.

use std::sync::Arc;

use tracing::{debug, info};

use super::registry::{BoardInstance, BoardRegistry};
use super::storage::BlobStore;
use super::types::{new_id, Board, Entry, Reply};
use crate::{DiscussionError, Result};

/// Reject values that are empty after trimming whitespace.
fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DiscussionError::Validation(format!(
            "{field} must not be blank"
        )));
    }
    Ok(())
}

/// The discussion store.
pub struct DiscussionStore<S> {
    storage: S,
    registry: BoardRegistry,
}

impl<S: BlobStore> DiscussionStore<S> {
    /// Create a store on top of the given blob storage.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            registry: BoardRegistry::new(),
        }
    }

    /// Get a reference to the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Get a reference to the board registry.
    pub fn registry(&self) -> &BoardRegistry {
        &self.registry
    }

    async fn instance(&self, board: &str) -> Result<Arc<BoardInstance>> {
        require_non_blank("board name", board)?;
        Ok(self.registry.resolve(board).await)
    }

    /// Load the current board state. Must be called within the board's turn.
    async fn load(&self, instance: &BoardInstance) -> Result<Board> {
        match self.storage.get(instance.storage_key()).await? {
            Some(bytes) => Board::from_bytes(&bytes),
            None => Ok(Board::default()),
        }
    }

    /// Persist the whole board. Must be called within the board's turn.
    async fn persist(&self, instance: &BoardInstance, board: &Board) -> Result<()> {
        let bytes = board.to_bytes()?;
        self.storage.put(instance.storage_key(), &bytes).await
    }

    /// List all entries of a board, newest first, each with its replies
    /// oldest first.
    pub async fn list_entries(&self, board: &str) -> Result<Vec<Entry>> {
        let instance = self.instance(board).await?;
        let _turn = instance.acquire().await;

        let state = self.load(&instance).await?;
        debug!(board = %instance.name(), entries = state.len(), "Listed entries");
        Ok(state.entries)
    }

    /// Post a new top-level entry at the front of the board.
    pub async fn post_entry(&self, board: &str, author: &str, body: &str) -> Result<Entry> {
        require_non_blank("name", author)?;
        require_non_blank("message", body)?;
        let instance = self.instance(board).await?;
        let _turn = instance.acquire().await;

        let mut state = self.load(&instance).await?;
        let mut entry = Entry::new(author, body);
        while state.contains_id(&entry.id) {
            entry.id = new_id();
        }
        state.insert_entry(entry.clone());
        self.persist(&instance, &state).await?;

        info!(board = %instance.name(), entry_id = %entry.id, "Entry posted");
        Ok(entry)
    }

    /// Post a reply at the end of an entry's reply sequence.
    ///
    /// Fails with `NotFound` if the entry does not exist (including when it
    /// was deleted by an earlier operation).
    pub async fn post_reply(
        &self,
        board: &str,
        entry_id: &str,
        author: &str,
        body: &str,
    ) -> Result<Reply> {
        require_non_blank("name", author)?;
        require_non_blank("message", body)?;
        let instance = self.instance(board).await?;
        let _turn = instance.acquire().await;

        let mut state = self.load(&instance).await?;
        let mut reply = Reply::new(author, body);
        while state.contains_id(&reply.id) {
            reply.id = new_id();
        }
        state
            .entry_mut(entry_id)
            .ok_or_else(|| DiscussionError::NotFound("entry".to_string()))?
            .push_reply(reply.clone());
        self.persist(&instance, &state).await?;

        info!(
            board = %instance.name(),
            entry_id = %entry_id,
            reply_id = %reply.id,
            "Reply posted"
        );
        Ok(reply)
    }

    /// Delete an entry together with all of its replies.
    ///
    /// Deleting a missing entry is a successful no-op. Returns whether an
    /// entry was removed.
    pub async fn delete_entry(&self, board: &str, entry_id: &str) -> Result<bool> {
        let instance = self.instance(board).await?;
        let _turn = instance.acquire().await;

        let mut state = self.load(&instance).await?;
        if !state.remove_entry(entry_id) {
            debug!(board = %instance.name(), entry_id = %entry_id, "Entry already absent");
            return Ok(false);
        }
        self.persist(&instance, &state).await?;

        info!(board = %instance.name(), entry_id = %entry_id, "Entry deleted");
        Ok(true)
    }

    /// Delete one reply of an entry.
    ///
    /// Fails with `NotFound` if the entry does not exist; deleting a missing
    /// reply of an existing entry is a successful no-op. Returns whether a
    /// reply was removed.
    pub async fn delete_reply(&self, board: &str, entry_id: &str, reply_id: &str) -> Result<bool> {
        let instance = self.instance(board).await?;
        let _turn = instance.acquire().await;

        let mut state = self.load(&instance).await?;
        let entry = state
            .entry_mut(entry_id)
            .ok_or_else(|| DiscussionError::NotFound("entry".to_string()))?;
        if !entry.remove_reply(reply_id) {
            debug!(
                board = %instance.name(),
                entry_id = %entry_id,
                reply_id = %reply_id,
                "Reply already absent"
            );
            return Ok(false);
        }
        self.persist(&instance, &state).await?;

        info!(
            board = %instance.name(),
            entry_id = %entry_id,
            reply_id = %reply_id,
            "Reply deleted"
        );
        Ok(true)
    }
}
