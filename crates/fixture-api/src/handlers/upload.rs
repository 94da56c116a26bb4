//! File upload handler
//!
//! Compares an uploaded file with the reference file on disk. The reference
//! file is read on every request, after the token has been accepted.

use axum::extract::State;
use axum::Json;
use fixture_core::{check_upload_content, check_upload_token, OK};

use crate::error::ApiError;
use crate::extract::UploadPayload;
use crate::state::AppState;

/// POST /upload/file
/// Multipart upload with fields `token` and `upload_file`
pub async fn upload_file(
    State(state): State<AppState>,
    upload: UploadPayload,
) -> Result<Json<&'static str>, ApiError> {
    tracing::debug!(
        filename = ?upload.filename,
        size = upload.file.len(),
        "File upload"
    );

    check_upload_token(&state.credentials().token, &upload.token)?;

    let path = state.reference_path();
    let reference = tokio::fs::read_to_string(path).await.map_err(|e| {
        ApiError::Internal(format!(
            "Failed to read reference file '{}': {}",
            path.display(),
            e
        ))
    })?;

    check_upload_content(&upload.file, &reference)?;

    tracing::info!(size = upload.file.len(), "Upload matches reference file");
    Ok(Json(OK))
}
