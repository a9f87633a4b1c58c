//! Ontology document upload endpoint.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub filename: String,
}

/// Upload an ontology document and register it in the store.
///
/// POST /file/upload/
///
/// Expects a multipart form with a `file` field. The document is kept in
/// the vault under its original filename and bulk-loaded into the
/// repository.
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_owned)
            .ok_or_else(|| ApiError::bad_request("file field has no filename"))?;
        let content = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("failed to read file field: {e}")))?;

        if !state
            .store
            .upload_and_register(&state.vault, &filename, &content)
            .await?
        {
            return Err(ApiError::bad_request("empty or rejected ontology document"));
        }

        tracing::info!(filename = %filename, "Ontology uploaded");
        return Ok(Json(UploadResponse { filename }).into_response());
    }

    Err(ApiError::bad_request("no file provided"))
}
