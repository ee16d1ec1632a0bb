//! Discussion handlers for Web API.

use axum::{
    extract::{Path, State},
    Json,
};
use std::future::Future;
use std::sync::Arc;

use crate::discussion::BlobStore;
use crate::web::dto::{
    ApiInfoResponse, EntryResponse, PostMessageRequest, ReplyResponse, SuccessResponse,
    ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::web::middleware::AdminGuard;
use crate::DiscussionError;

/// GET /api/discussion - List entries, newest first.
pub async fn list_entries<S: BlobStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<EntryResponse>>, ApiError> {
    match state.store.list_entries(&state.board_name).await {
        Ok(entries) => Ok(Json(
            entries.into_iter().map(EntryResponse::from).collect(),
        )),
        Err(e) if state.fail_open_reads => {
            tracing::warn!("Failed to list entries, answering empty: {}", e);
            Ok(Json(Vec::new()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Run a store mutation on its own task so a dropped connection cannot cancel
/// it halfway through.
async fn run_to_completion<T, F>(operation: F) -> Result<crate::Result<T>, ApiError>
where
    F: Future<Output = crate::Result<T>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(operation).await.map_err(|e| {
        tracing::error!("Store task failed: {}", e);
        ApiError::internal("An internal error occurred")
    })
}

/// POST /api/discussion - Post a new entry.
pub async fn create_entry<S: BlobStore>(
    State(state): State<Arc<AppState<S>>>,
    ValidatedJson(req): ValidatedJson<PostMessageRequest>,
) -> Result<Json<EntryResponse>, ApiError> {
    let entry = run_to_completion(async move {
        state
            .store
            .post_entry(&state.board_name, &req.name, &req.message)
            .await
    })
    .await??;

    Ok(Json(EntryResponse::from(entry)))
}

/// POST /api/discussion/:entry_id/reply - Reply to an entry.
pub async fn create_reply<S: BlobStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(entry_id): Path<String>,
    ValidatedJson(req): ValidatedJson<PostMessageRequest>,
) -> Result<Json<ReplyResponse>, ApiError> {
    let reply = run_to_completion(async move {
        state
            .store
            .post_reply(&state.board_name, &entry_id, &req.name, &req.message)
            .await
    })
    .await??;

    Ok(Json(ReplyResponse::from(reply)))
}

/// DELETE /api/discussion/:entry_id - Delete an entry and its replies (admin).
pub async fn delete_entry<S: BlobStore>(
    State(state): State<Arc<AppState<S>>>,
    _admin: AdminGuard,
    Path(entry_id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    run_to_completion(async move {
        state
            .store
            .delete_entry(&state.board_name, &entry_id)
            .await
    })
    .await??;

    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /api/discussion/:entry_id/reply/:reply_id - Delete a reply (admin).
///
/// A missing entry is reported as success, like any other absent target.
pub async fn delete_reply<S: BlobStore>(
    State(state): State<Arc<AppState<S>>>,
    _admin: AdminGuard,
    Path((entry_id, reply_id)): Path<(String, String)>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let result = run_to_completion(async move {
        state
            .store
            .delete_reply(&state.board_name, &entry_id, &reply_id)
            .await
    })
    .await?;

    match result {
        Ok(_) | Err(DiscussionError::NotFound(_)) => Ok(Json(SuccessResponse::ok())),
        Err(e) => Err(e.into()),
    }
}

/// GET /api/ - Site information.
pub async fn api_info<S: BlobStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        name: state.site_name.clone(),
    })
}
