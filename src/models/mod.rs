//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos con el schema explícito de cada
//! colección del store, más los tipos derivados (estadísticas, recordatorios).

pub mod charging_session;
pub mod preferences;
pub mod reminder;
pub mod station;
pub mod stats;
pub mod timestamp;
pub mod user_vehicle;
pub mod vehicle_model;

pub use charging_session::{ChargingSession, ChargingSpeed, NewChargingSession};
pub use preferences::{PlannedTrip, ReminderSettings, UserPreferences};
pub use reminder::{ReminderKind, ReminderPriority, SmartReminder};
pub use station::{EnrichedStation, ExtrasSource, LatLng, RawPlace, StationExtras};
pub use stats::ChargingStats;
pub use user_vehicle::{NewUserVehicle, UserVehicle};
pub use vehicle_model::{find_model, VehicleModel, EV_MODELS};
