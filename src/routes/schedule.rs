use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::schedule::{next_race, season_calendar};
use crate::utils::state::AppState;

pub fn schedule_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/next", get(next_race))
        .route("/calendar/{season}", get(season_calendar))
}
