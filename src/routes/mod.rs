//! Rutas HTTP
//!
//! Handlers finos sobre los servicios de `AppState`.

pub mod catalog_routes;
pub mod charging_routes;
pub mod preferences_routes;
pub mod station_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Router completo de la API con CORS y trazas
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .merge(catalog_routes::create_catalog_router())
        .merge(vehicle_routes::create_vehicle_router())
        .merge(charging_routes::create_charging_router())
        .merge(preferences_routes::create_preferences_router())
        .merge(station_routes::create_station_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
