//! Router configuration for Web API.

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::handlers::{
    api_info, create_entry, create_reply, delete_entry, delete_reply, list_entries, AppState,
};
use super::middleware::{admin_gate, create_cors_layer, security_headers};
use crate::discussion::BlobStore;

/// Create the main API router.
pub fn create_router<S: BlobStore>(app_state: Arc<AppState<S>>, cors_origins: &[String]) -> Router {
    // "/api/" is matched literally; nesting a root route would only match "/api".
    let api_routes = Router::new()
        .route("/api/", get(api_info::<S>))
        .route(
            "/api/discussion",
            get(list_entries::<S>).post(create_entry::<S>),
        )
        .route("/api/discussion/:entry_id", delete(delete_entry::<S>))
        .route("/api/discussion/:entry_id/reply", post(create_reply::<S>))
        .route(
            "/api/discussion/:entry_id/reply/:reply_id",
            delete(delete_reply::<S>),
        );

    let admin = app_state.admin.clone();

    api_routes
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(security_headers))
                .layer(middleware::from_fn(move |req, next| {
                    admin_gate(admin.clone(), req, next)
                })),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// Serve a pre-built frontend, falling back to its `index.html` for
/// client-side routes.
///
/// Returns `None` if the directory does not exist.
pub fn create_static_router(static_path: &str) -> Option<Router> {
    let root = Path::new(static_path);
    if !root.is_dir() {
        tracing::warn!("Static directory not found: {}", static_path);
        return None;
    }

    let index = root.join("index.html");
    let serve_dir = ServeDir::new(root).fallback(ServeFile::new(index));

    tracing::info!("Serving static files from {}", static_path);
    Some(
        Router::new()
            .fallback_service(serve_dir)
            .layer(middleware::from_fn(security_headers)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_health_router() {
        let response = create_health_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"OK");
    }

    #[test]
    fn test_static_router_missing_dir() {
        assert!(create_static_router("/nonexistent/static/dir").is_none());
    }

    #[tokio::test]
    async fn test_static_router_index_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>board</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();

        let router = create_static_router(dir.path().to_str().unwrap()).unwrap();

        let response = router
            .clone()
            .oneshot(Request::builder().uri("/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"console.log(1)");

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/some/client/route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<html>board</html>");
    }
}
