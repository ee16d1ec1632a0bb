//! Response DTOs for Web API.

use serde::Serialize;

use crate::discussion::{Entry, Reply};

/// A reply as exposed over HTTP.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyResponse {
    /// Reply ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Message text.
    pub message: String,
    /// Creation time (milliseconds since the epoch).
    pub timestamp: i64,
}

impl From<Reply> for ReplyResponse {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id,
            name: reply.author,
            message: reply.body,
            timestamp: reply.created_at,
        }
    }
}

/// An entry with its replies, as exposed over HTTP.
#[derive(Debug, Clone, Serialize)]
pub struct EntryResponse {
    /// Entry ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Message text.
    pub message: String,
    /// Creation time (milliseconds since the epoch).
    pub timestamp: i64,
    /// Replies, oldest first.
    pub replies: Vec<ReplyResponse>,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id,
            name: entry.author,
            message: entry.body,
            timestamp: entry.created_at,
            replies: entry.replies.into_iter().map(ReplyResponse::from).collect(),
        }
    }
}

/// Body returned by the delete endpoints.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Body of `GET /api/`.
#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    /// Site name.
    pub name: String,
}
