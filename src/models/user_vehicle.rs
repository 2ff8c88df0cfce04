//! Modelo de UserVehicle
//!
//! Vehículo propiedad de un usuario. Vive en la colección `userVehicles`;
//! nunca se borra físicamente, solo se desactiva con `is_active = false`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

pub const USER_VEHICLES_COLLECTION: &str = "userVehicles";
pub const DEFAULT_BATTERY_LEVEL: i32 = 100;

/// Registro de vehículo tal y como vive en el store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserVehicle {
    pub id: String,
    pub user_id: String,
    /// Identificador del `VehicleModel` del catálogo
    pub vehicle_id: String,
    pub nickname: String,
    #[serde(with = "timestamp")]
    pub purchase_date: DateTime<Utc>,
    pub current_battery: i32,
    #[serde(default)]
    pub total_mileage: f64,
    pub is_active: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Campos de un vehículo nuevo (sin id, lo asigna el store)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserVehicle {
    pub user_id: String,
    pub vehicle_id: String,
    pub nickname: String,
    #[serde(with = "timestamp")]
    pub purchase_date: DateTime<Utc>,
    pub current_battery: i32,
    pub total_mileage: f64,
    pub is_active: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}
