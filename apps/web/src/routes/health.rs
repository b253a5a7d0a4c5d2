use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and whether readings
/// come from the model or the offline fallback.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let generation = if state.config.openai_api_key.is_some() {
        "online"
    } else {
        "offline"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "celestial",
        "generation": generation
    }))
}
