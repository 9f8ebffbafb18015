use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::results::race_results;
use crate::utils::state::AppState;

pub fn result_routes() -> Router<Arc<AppState>> {
    Router::new().route("/{season}/{name}", get(race_results))
}
