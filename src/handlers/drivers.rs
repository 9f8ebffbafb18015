use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::warn;

use crate::models::ApiError;
use crate::utils::state::AppState;

pub async fn driver_info(
    State(state): State<Arc<AppState>>,
    Path(driver_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let driver = state
        .ergast
        .driver(&driver_id)
        .await
        .inspect_err(|err| warn!(driver = %driver_id, error = %err, "driver lookup failed"))?;

    match driver {
        Some(driver) => Ok(Json(json!(driver))),
        None => Err(ApiError::NotFound(format!(
            "No information found for driver '{driver_id}'"
        ))),
    }
}
