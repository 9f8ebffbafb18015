use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::standings::{constructor_standings, driver_standings};
use crate::utils::state::AppState;

pub fn standings_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/drivers/{season}", get(driver_standings))
        .route("/constructors/{season}", get(constructor_standings))
}
