use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::warn;

use crate::models::ApiError;
use crate::utils::state::AppState;

pub async fn driver_standings(
    State(state): State<Arc<AppState>>,
    Path(season): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let standings = state
        .ergast
        .driver_standings(&season)
        .await
        .inspect_err(|err| warn!(season = %season, error = %err, "driver standings fetch failed"))?;
    if standings.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No driver standings for season {season}"
        )));
    }
    Ok(Json(json!({ "season": season, "standings": standings })))
}

pub async fn constructor_standings(
    State(state): State<Arc<AppState>>,
    Path(season): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let standings = state
        .ergast
        .constructor_standings(&season)
        .await
        .inspect_err(|err| warn!(season = %season, error = %err, "constructor standings fetch failed"))?;
    if standings.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No constructor standings for season {season}"
        )));
    }
    Ok(Json(json!({ "season": season, "standings": standings })))
}
