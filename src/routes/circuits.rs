use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::circuits::resolve_circuit;
use crate::utils::state::AppState;

pub fn circuit_routes() -> Router<Arc<AppState>> {
    Router::new().route("/resolve/{season}/{name}", get(resolve_circuit))
}
