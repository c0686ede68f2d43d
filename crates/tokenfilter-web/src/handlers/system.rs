//! Liveness probe.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::SharedState;

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "source": state.source.name(),
    }))
}
