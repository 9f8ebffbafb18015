use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::ergast::ErgastError;

/// Surface-level outcome for a request that could not produce a payload.
/// `NotFound` is informational and carries user-facing text; `Upstream`
/// covers transport and decode failures from the stats API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("upstream request failed")]
    Upstream(#[from] ErgastError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            ApiError::Upstream(_) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "No data found" })),
            )
                .into_response(),
        }
    }
}
