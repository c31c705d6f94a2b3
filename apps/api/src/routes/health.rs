use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /health
/// Returns service status, version and the number of stored analyses.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let analyses_count = state.store.count().await?;
    Ok(Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "cvision-api",
        "scorer": state.scorer.backend(),
        "analyses_count": analyses_count
    })))
}
