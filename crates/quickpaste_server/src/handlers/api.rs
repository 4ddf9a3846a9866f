//! JSON API handlers.

use crate::error::HttpError;
use crate::models::paste::{CreatePasteRequest, Paste};
use crate::AppState;
use axum::{extract::State, Json};

/// Create a paste from a JSON payload.
///
/// # Returns
/// The new record's id plus the full record as JSON.
///
/// # Errors
/// `400` with a reason on validation failure, `500` when the durable
/// rewrite fails.
pub async fn create_paste(
    State(state): State<AppState>,
    Json(req): Json<CreatePasteRequest>,
) -> Result<Json<serde_json::Value>, HttpError> {
    let paste = state
        .store
        .create(&req.content, req.title.as_deref(), req.language.as_deref())?;
    Ok(Json(serde_json::json!({ "id": paste.id, "paste": paste })))
}

/// List every paste, newest first, with full content.
///
/// # Errors
/// `500` when the store cannot produce a snapshot.
pub async fn list_pastes(State(state): State<AppState>) -> Result<Json<Vec<Paste>>, HttpError> {
    Ok(Json(state.store.all()?))
}
