pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::handlers::{jds, outcomes, resumes, variants};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Resumes
        .route(
            "/api/v1/resumes/upload",
            post(resumes::handle_upload_resume).layer(upload_limit),
        )
        .route("/api/v1/resumes", get(resumes::handle_list_resumes))
        .route("/api/v1/resumes/:id", get(resumes::handle_get_resume))
        // Job descriptions
        .route("/api/v1/jds", post(jds::handle_create_jd))
        .route("/api/v1/jds/signals", post(jds::handle_preview_signals))
        .route("/api/v1/jds/:id", get(jds::handle_get_jd))
        // Variants
        .route(
            "/api/v1/variants/compile",
            post(variants::handle_compile_variant),
        )
        .route("/api/v1/variants", get(variants::handle_list_variants))
        .route("/api/v1/variants/:id", get(variants::handle_get_variant))
        // Outcomes
        .route(
            "/api/v1/outcomes",
            post(outcomes::handle_record_outcome).get(outcomes::handle_list_outcomes),
        )
        .with_state(state)
}
