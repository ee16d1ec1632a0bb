//! HTTP gateway for the discussion board.
//!
//! Exposes the discussion store over a small JSON API, guarded by an admin
//! password for deletions, with optional static frontend serving.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
