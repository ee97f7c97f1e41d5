use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::ParseResult;
use crate::state::AppState;

/// Name of the multipart part carrying the resume document.
const FILE_FIELD: &str = "file";

/// POST /api/v1/resumes/parse
///
/// Accepts `multipart/form-data` with a `file` part and returns the parsed resume.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResult>, AppError> {
    let upload_id = Uuid::new_v4();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.map_err(multipart_error)?;
        info!(
            "Upload {upload_id}: parsing {} ({} bytes)",
            file_name.as_deref().unwrap_or("<unnamed>"),
            bytes.len()
        );

        let result = state
            .parser
            .parse_bytes(bytes.to_vec(), file_name.as_deref())
            .await?;
        return Ok(Json(result));
    }

    Err(AppError::Validation(format!(
        "multipart body has no '{FILE_FIELD}' part"
    )))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", err.body_text()))
    }
}
