//! Middleware for Web API.

pub mod admin;
pub mod cors;
pub mod security;

pub use admin::{admin_gate, AdminGate, AdminGuard, ADMIN_PASSWORD_HEADER};
pub use cors::create_cors_layer;
pub use security::security_headers;
