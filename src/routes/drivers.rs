use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::drivers::driver_info;
use crate::utils::state::AppState;

pub fn driver_routes() -> Router<Arc<AppState>> {
    Router::new().route("/{driver_id}", get(driver_info))
}
