use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::warn;

use crate::core::schedule;
use crate::models::ApiError;
use crate::utils::state::AppState;

pub async fn season_calendar(
    State(state): State<Arc<AppState>>,
    Path(season): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let races = state
        .ergast
        .races(&season)
        .await
        .inspect_err(|err| warn!(season = %season, error = %err, "calendar fetch failed"))?;
    if races.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No race information for season {season}"
        )));
    }
    Ok(Json(json!({ "season": season, "races": races })))
}

pub async fn next_race(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let races = state
        .ergast
        .races("current")
        .await
        .inspect_err(|err| warn!(error = %err, "race list fetch failed"))?;

    let (race, start) = schedule::next_race(&races, Utc::now()).ok_or_else(|| {
        ApiError::NotFound("No upcoming race in the current season".to_string())
    })?;

    Ok(Json(json!({
        "raceName": race.race_name,
        "circuitName": race.circuit.circuit_name,
        "date": schedule::display_time(start),
        "timezone": "Europe/Madrid",
    })))
}
