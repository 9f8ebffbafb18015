use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::core::resolver;
use crate::models::ApiError;
use crate::utils::state::AppState;

pub async fn resolve_circuit(
    State(state): State<Arc<AppState>>,
    Path((season, name)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    match resolver::resolve(&state.ergast, &name, &season).await {
        Some(circuit_id) => Ok(Json(json!({ "circuitId": circuit_id }))),
        None => Err(ApiError::NotFound(format!(
            "No circuit found for '{name}' in {season}"
        ))),
    }
}
