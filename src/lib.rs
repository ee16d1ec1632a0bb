//! Discussion board
//!
//! A persistent discussion board with threaded replies. Every board is
//! stored as one serialized value and all operations on a board run one at a
//! time, in arrival order.

pub mod config;
pub mod db;
pub mod discussion;
pub mod error;
pub mod logging;
pub mod web;

pub use config::Config;
pub use db::Database;
pub use discussion::{
    BlobStore, Board, DiscussionStore, Entry, MemoryBlobStore, Reply, SqliteBlobStore,
};
pub use error::{DiscussionError, Result};
