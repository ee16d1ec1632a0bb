//! API handlers for the discussion gateway.

pub mod discussion;

pub use discussion::*;

use std::sync::Arc;

use crate::discussion::{BlobStore, DiscussionStore, SqliteBlobStore};
use crate::web::middleware::AdminGate;

/// Shared state of the HTTP gateway.
pub struct AppState<S: BlobStore = SqliteBlobStore> {
    /// Discussion store.
    pub store: Arc<DiscussionStore<S>>,
    /// Board served by the gateway.
    pub board_name: String,
    /// Answer `[]` instead of 500 when a listing fails.
    pub fail_open_reads: bool,
    /// Site name reported by `GET /api/`.
    pub site_name: String,
    /// Admin password check.
    pub admin: Arc<AdminGate>,
}

impl<S: BlobStore> AppState<S> {
    /// Create gateway state with fail-open reads enabled.
    pub fn new(
        store: Arc<DiscussionStore<S>>,
        board_name: impl Into<String>,
        site_name: impl Into<String>,
        admin_password: &str,
    ) -> Self {
        Self {
            store,
            board_name: board_name.into(),
            fail_open_reads: true,
            site_name: site_name.into(),
            admin: Arc::new(AdminGate::new(admin_password)),
        }
    }

    /// Set whether listing failures are reported as an empty board.
    pub fn with_fail_open_reads(mut self, fail_open_reads: bool) -> Self {
        self.fail_open_reads = fail_open_reads;
        self
    }
}
