//! Variant compilation: load inputs, compile, score, persist.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::engine::{calculate_survivability_score, compile_resume_variant, Persona, Platform};
use crate::errors::AppError;
use crate::models::variant::{NewVariant, VariantRow};
use crate::state::AppState;
use crate::store::VariantFilter;

#[derive(Debug, Deserialize)]
pub struct CompileVariantRequest {
    pub resume_id: Uuid,
    pub jd_id: Uuid,
    pub persona: String,
    pub platform: String,
}

#[derive(Debug, Deserialize)]
pub struct VariantListQuery {
    pub resume_id: Option<Uuid>,
    pub jd_id: Option<Uuid>,
}

/// POST /api/v1/variants/compile
///
/// Persona and platform are validated here so the engine only ever sees supported values.
/// The compiled text and the scores are computed independently from the same two inputs.
pub async fn handle_compile_variant(
    State(state): State<AppState>,
    Json(request): Json<CompileVariantRequest>,
) -> Result<Json<VariantRow>, AppError> {
    let persona: Persona = request.persona.parse().map_err(AppError::Validation)?;
    let platform: Platform = request.platform.parse().map_err(AppError::Validation)?;

    let resume = state
        .store
        .get_resume(request.resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    let jd = state
        .store
        .get_job_description(request.jd_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job description not found".to_string()))?;

    let compiled_text = compile_resume_variant(
        &resume.raw_text,
        &jd.raw_text,
        persona.as_str(),
        platform.as_str(),
    );
    let scores = calculate_survivability_score(&resume.raw_text, &jd.raw_text, platform.as_str());

    let variant = state
        .store
        .insert_variant(NewVariant {
            resume_id: resume.id,
            jd_id: jd.id,
            persona: persona.as_str().to_string(),
            platform: platform.as_str().to_string(),
            compiled_text,
            scores: serde_json::to_value(scores).map_err(|e| AppError::Internal(e.into()))?,
        })
        .await?;

    info!(
        "Compiled variant {} (resume {}, jd {}, {persona}/{platform}, survivability {:.2})",
        variant.id, resume.id, jd.id, scores.survivability
    );

    Ok(Json(variant))
}

/// GET /api/v1/variants/:id
pub async fn handle_get_variant(
    State(state): State<AppState>,
    Path(variant_id): Path<Uuid>,
) -> Result<Json<VariantRow>, AppError> {
    let variant = state
        .store
        .get_variant(variant_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Variant not found".to_string()))?;
    Ok(Json(variant))
}

/// GET /api/v1/variants?resume_id=&jd_id=
pub async fn handle_list_variants(
    State(state): State<AppState>,
    Query(params): Query<VariantListQuery>,
) -> Result<Json<Vec<VariantRow>>, AppError> {
    let variants = state
        .store
        .list_variants(VariantFilter {
            resume_id: params.resume_id,
            jd_id: params.jd_id,
        })
        .await?;
    Ok(Json(variants))
}
