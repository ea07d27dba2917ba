//! Application outcome tracking per variant.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::variant::{NewOutcome, OutcomeRow, OutcomeStatus};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecordOutcomeRequest {
    pub variant_id: Uuid,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct OutcomeListQuery {
    pub variant_id: Option<Uuid>,
}

/// POST /api/v1/outcomes
pub async fn handle_record_outcome(
    State(state): State<AppState>,
    Json(request): Json<RecordOutcomeRequest>,
) -> Result<Json<OutcomeRow>, AppError> {
    let status: OutcomeStatus = request.status.parse().map_err(AppError::Validation)?;

    if state.store.get_variant(request.variant_id).await?.is_none() {
        return Err(AppError::NotFound("Variant not found".to_string()));
    }

    let outcome = state
        .store
        .insert_outcome(NewOutcome {
            variant_id: request.variant_id,
            status: status.as_str().to_string(),
        })
        .await?;

    info!(
        "Recorded outcome '{}' for variant {}",
        outcome.status, outcome.variant_id
    );

    Ok(Json(outcome))
}

/// GET /api/v1/outcomes?variant_id=
pub async fn handle_list_outcomes(
    State(state): State<AppState>,
    Query(params): Query<OutcomeListQuery>,
) -> Result<Json<Vec<OutcomeRow>>, AppError> {
    let outcomes = state.store.list_outcomes(params.variant_id).await?;
    Ok(Json(outcomes))
}
