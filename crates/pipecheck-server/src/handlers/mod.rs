//! HTTP route handlers for the pipecheck server.

pub mod pipeline;

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe.
pub async fn ping() -> Json<Value> {
    Json(json!({ "Ping": "Pong" }))
}
