//! Health check handler.

use axum::Json;
use serde_json::{json, Value};

/// `GET /health` — liveness probe, never fails.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}
