//! API HTTP de vehículos
//!
//! Capas: handlers (`routes`) → servicio (`services`) → repositorio
//! (`repositories`) sobre un mapa en memoria `id -> Vehicle`.

pub mod config;
pub mod dto;
pub mod loader;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use middleware::cors::cors_layer;
use state::AppState;

/// Construir el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/ping", get(ping))
        .nest("/vehicles", routes::vehicle_routes::create_vehicle_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de prueba simple
async fn ping() -> &'static str {
    "pong"
}
