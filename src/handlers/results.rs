use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::warn;

use crate::core::{resolver, results};
use crate::models::ApiError;
use crate::utils::state::AppState;

pub async fn race_results(
    State(state): State<Arc<AppState>>,
    Path((season, name)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let page = params
        .get("page")
        .and_then(|p| p.parse::<usize>().ok())
        .unwrap_or(1);

    let circuit_id = resolver::resolve(&state.ergast, &name, &season)
        .await
        .ok_or_else(|| {
            ApiError::NotFound(format!("No circuit found for '{name}' in {season}"))
        })?;

    // A failed fetch renders the same as a race with no results; the log
    // line keeps the two distinguishable.
    let rows = match results::fetch_results(&state.ergast, &circuit_id, &season).await {
        Ok(rows) => rows,
        Err(err) => {
            warn!(season = %season, circuit = %circuit_id, error = %err, "result fetch failed");
            Vec::new()
        }
    };
    if rows.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No results found for '{name}' in {season}"
        )));
    }

    let results_page = results::page_of(&rows, page)
        .ok_or_else(|| ApiError::NotFound(format!("Page {page} is out of range")))?;

    Ok(Json(json!({
        "season": season,
        "circuitId": circuit_id,
        "results": results_page,
    })))
}
