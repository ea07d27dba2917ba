//! Resume upload and retrieval.

use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::document::extract_text;
use crate::errors::AppError;
use crate::models::resume::{NewResume, ResumeRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResumeListQuery {
    pub user_id: Option<String>,
}

/// POST /api/v1/resumes/upload
///
/// Multipart form: `file` (PDF, DOCX or TXT) and optional `user_id`.
/// Stores the extracted plain text; the binary is not kept.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeRow>, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut user_id: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Error reading upload: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Error reading file: {e}")))?;
                file = Some((filename, data));
            }
            Some("user_id") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Error reading user_id: {e}")))?;
                user_id = Some(value);
            }
            _ => {}
        }
    }

    let (filename, data) = file
        .filter(|(filename, _)| !filename.is_empty())
        .ok_or_else(|| AppError::Validation("No file provided".to_string()))?;
    if data.is_empty() {
        return Err(AppError::Validation("File is empty".to_string()));
    }

    // PDF parsing is CPU-bound; keep it off the async workers.
    let raw_text = tokio::task::spawn_blocking(move || extract_text(&data, &filename))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    if raw_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from file. Please ensure the file is a valid PDF, DOCX, or TXT file."
                .to_string(),
        ));
    }

    let user_id = user_id
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| state.config.default_user_id.clone());

    let resume = state
        .store
        .insert_resume(NewResume { user_id, raw_text })
        .await?;

    info!(
        "Stored resume {} for user {} ({} chars)",
        resume.id,
        resume.user_id,
        resume.raw_text.len()
    );

    Ok(Json(resume))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<ResumeRow>, AppError> {
    let resume = state
        .store
        .get_resume(resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;
    Ok(Json(resume))
}

/// GET /api/v1/resumes?user_id=
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<ResumeListQuery>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    let user_id = params
        .user_id
        .unwrap_or_else(|| state.config.default_user_id.clone());
    let resumes = state.store.list_resumes(&user_id).await?;
    Ok(Json(resumes))
}
