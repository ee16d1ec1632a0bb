//! Admin password check for the delete endpoints.

use axum::{
    async_trait,
    body::Body,
    extract::FromRequestParts,
    http::{request::Parts, Request},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::web::error::ApiError;

/// Request header carrying the admin password.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Holds the digest of the configured admin password.
///
/// An empty password disables every admin operation.
#[derive(Clone)]
pub struct AdminGate {
    digest: Option<[u8; 32]>,
}

impl AdminGate {
    /// Create a gate for the given password.
    pub fn new(password: &str) -> Self {
        let digest = if password.is_empty() {
            None
        } else {
            Some(digest_of(password))
        };
        Self { digest }
    }

    /// Whether an admin password is configured.
    pub fn is_enabled(&self) -> bool {
        self.digest.is_some()
    }

    /// Check a candidate password.
    pub fn verify(&self, candidate: &str) -> bool {
        match &self.digest {
            Some(expected) => {
                let actual = digest_of(candidate);
                expected
                    .iter()
                    .zip(actual.iter())
                    .fold(0u8, |acc, (a, b)| acc | (a ^ b))
                    == 0
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

fn digest_of(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

/// Extractor that admits only requests carrying the admin password.
#[derive(Debug, Clone, Copy)]
pub struct AdminGuard;

#[async_trait]
impl<S> FromRequestParts<S> for AdminGuard
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let gate = parts
            .extensions
            .get::<Arc<AdminGate>>()
            .ok_or_else(|| ApiError::internal("Admin gate not configured"))?;

        if !gate.is_enabled() {
            return Err(ApiError::unauthorized("Admin operations are disabled"));
        }

        let password = parts
            .headers
            .get(ADMIN_PASSWORD_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing admin password"))?;

        if !gate.verify(password) {
            tracing::warn!("Rejected admin request with wrong password");
            return Err(ApiError::unauthorized("Invalid admin password"));
        }

        Ok(AdminGuard)
    }
}

/// Middleware function to inject the admin gate into request extensions.
pub async fn admin_gate(gate: Arc<AdminGate>, mut request: Request<Body>, next: Next) -> Response {
    request.extensions_mut().insert(gate);
    next.run(request).await
}
