//! Discussion models.
//!
//! A [`Board`] is the unit of persistence: the whole value is serialized
//! and written back on every mutation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Result;

/// Mint a fresh opaque identifier (128 random bits as 32 hex characters).
pub(crate) fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Current time in milliseconds since the Unix epoch.
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// A response attached to exactly one [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Store-generated identifier.
    pub id: String,
    /// Display name of the poster.
    pub author: String,
    /// Message text.
    pub body: String,
    /// Creation time in milliseconds since the epoch.
    pub created_at: i64,
}

impl Reply {
    pub(crate) fn new(author: &str, body: &str) -> Self {
        Self {
            id: new_id(),
            author: author.to_string(),
            body: body.to_string(),
            created_at: now_millis(),
        }
    }
}

/// A top-level discussion post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Store-generated identifier.
    pub id: String,
    /// Display name of the poster.
    pub author: String,
    /// Message text.
    pub body: String,
    /// Creation time in milliseconds since the epoch.
    pub created_at: i64,
    /// Replies in arrival order.
    #[serde(default)]
    pub replies: Vec<Reply>,
}

impl Entry {
    pub(crate) fn new(author: &str, body: &str) -> Self {
        Self {
            id: new_id(),
            author: author.to_string(),
            body: body.to_string(),
            created_at: now_millis(),
            replies: Vec::new(),
        }
    }

    /// Append a reply at the end of the reply sequence.
    pub fn push_reply(&mut self, reply: Reply) {
        self.replies.push(reply);
    }

    /// Remove a reply by ID, keeping the order of the others.
    ///
    /// Returns whether a reply was removed.
    pub fn remove_reply(&mut self, reply_id: &str) -> bool {
        match self.replies.iter().position(|r| r.id == reply_id) {
            Some(index) => {
                self.replies.remove(index);
                true
            }
            None => false,
        }
    }
}

/// The full collection of one named board, newest entry first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Entries in newest-first insertion order.
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Board {
    /// Decode a board from its stored form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Encode the board into its stored form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Insert an entry at the front.
    pub fn insert_entry(&mut self, entry: Entry) {
        self.entries.insert(0, entry);
    }

    /// Get a mutable entry by ID.
    pub fn entry_mut(&mut self, entry_id: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id == entry_id)
    }

    /// Remove an entry and its replies.
    ///
    /// Returns whether an entry was removed.
    pub fn remove_entry(&mut self, entry_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != entry_id);
        self.entries.len() != before
    }

    /// Check whether any entry or reply already uses the given ID.
    pub fn contains_id(&self, id: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.id == id || e.replies.iter().any(|r| r.id == id))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the board has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
