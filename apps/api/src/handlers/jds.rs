//! Job description intake and signal preview.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::engine::{extract_jd_signals, JdSignals, Platform};
use crate::errors::AppError;
use crate::models::resume::{JobDescriptionRow, NewJobDescription};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateJobDescriptionRequest {
    pub platform: String,
    pub raw_text: String,
}

#[derive(Debug, Deserialize)]
pub struct SignalsRequest {
    pub raw_text: String,
}

/// POST /api/v1/jds
///
/// Validates the platform, extracts signals once, and stores them alongside the text.
pub async fn handle_create_jd(
    State(state): State<AppState>,
    Json(request): Json<CreateJobDescriptionRequest>,
) -> Result<Json<JobDescriptionRow>, AppError> {
    let platform: Platform = request.platform.parse().map_err(AppError::Validation)?;

    let signals = extract_jd_signals(&request.raw_text);
    let extracted_signals =
        serde_json::to_value(&signals).map_err(|e| AppError::Internal(e.into()))?;

    let jd = state
        .store
        .insert_job_description(NewJobDescription {
            platform: platform.as_str().to_string(),
            raw_text: request.raw_text,
            extracted_signals,
        })
        .await?;

    info!(
        "Stored job description {} ({}, {} terms, seniority {})",
        jd.id,
        platform,
        signals.top_terms.len(),
        signals.seniority.as_str()
    );

    Ok(Json(jd))
}

/// GET /api/v1/jds/:id
pub async fn handle_get_jd(
    State(state): State<AppState>,
    Path(jd_id): Path<Uuid>,
) -> Result<Json<JobDescriptionRow>, AppError> {
    let jd = state
        .store
        .get_job_description(jd_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job description not found".to_string()))?;
    Ok(Json(jd))
}

/// POST /api/v1/jds/signals
///
/// Previews extraction without persisting anything.
pub async fn handle_preview_signals(
    Json(request): Json<SignalsRequest>,
) -> Result<Json<JdSignals>, AppError> {
    Ok(Json(extract_jd_signals(&request.raw_text)))
}
