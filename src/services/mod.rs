//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación. Los servicios
//! combinan repositorios, cache y reloj; la lógica pura vive en funciones
//! libres para poder probarla sin store.

pub mod charging_service;
pub mod demo_data;
pub mod preferences_service;
pub mod reminder_service;
pub mod station_service;
pub mod vehicle_service;

pub use charging_service::{aggregate_stats, ChargingService};
pub use demo_data::generate_sample_charging_history;
pub use preferences_service::PreferencesService;
pub use reminder_service::{generate_smart_reminders, ReminderService};
pub use station_service::{enrich_stations, StationService};
pub use vehicle_service::VehicleService;
