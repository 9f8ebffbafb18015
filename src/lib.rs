pub mod core;
pub mod ergast;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod utils;
