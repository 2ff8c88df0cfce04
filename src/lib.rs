//! EV Charging Companion
//!
//! Backend del acompañante de carga para vehículos eléctricos: garaje de
//! vehículos por usuario, historial y estadísticas de carga, recordatorios,
//! preferencias y búsqueda de estaciones cercanas.

pub mod cache;
pub mod clients;
pub mod config;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_router;
pub use state::AppState;
