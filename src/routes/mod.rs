pub mod circuits;
pub mod drivers;
pub mod results;
pub mod schedule;
pub mod standings;

use std::sync::Arc;

use axum::{response::IntoResponse, routing::get, Json, Router};
use http::StatusCode;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::{
    ergast::ErgastClient,
    routes::{
        circuits::circuit_routes, drivers::driver_routes, results::result_routes,
        schedule::schedule_routes, standings::standings_routes,
    },
    utils::{config::Config, state::AppState},
};

pub fn make_app(config: Config) -> Router {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("axum::rejection", Level::TRACE)
        .with_target(env!("CARGO_PKG_NAME"), level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();

    info!("Initializing application...");
    let ergast = ErgastClient::new(config.ergast_base_url.clone());
    let state = Arc::new(AppState { config, ergast });
    info!("Upstream client initialized successfully");

    Router::new()
        .route("/", get(health_check))
        .nest("/circuits", circuit_routes())
        .nest("/results", result_routes())
        .nest("/schedule", schedule_routes())
        .nest("/standings", standings_routes())
        .nest("/drivers", driver_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"message": "Hello World"}))).into_response()
}
