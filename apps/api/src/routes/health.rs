use axum::Json;
use serde_json::{json, Value};

use crate::engine::Platform;

/// GET /health
/// Returns a simple status object with service version and supported platforms.
pub async fn health_handler() -> Json<Value> {
    let platforms: Vec<&str> = Platform::ALL.iter().map(Platform::as_str).collect();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "ats-api",
        "platforms": platforms
    }))
}
