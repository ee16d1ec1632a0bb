//! Discussion module.
//!
//! This module provides the discussion store and its collaborators:
//! - Entry, reply and board models
//! - Board addressing (one serialization unit per board name)
//! - Blob storage adapters (SQLite and in-memory)
//! - The store operations (list, post, reply, delete)

mod registry;
mod storage;
mod store;
mod types;

pub use registry::{BoardInstance, BoardRegistry};
pub use storage::{BlobStore, MemoryBlobStore, SqliteBlobStore};
pub use store::DiscussionStore;
pub use types::{Board, Entry, Reply};
