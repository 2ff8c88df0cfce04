//! Modelo de ChargingSession
//!
//! Sesión de carga en la colección `chargingSessions`. Inmutable una vez
//! creada salvo los campos de finalización.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

pub const CHARGING_SESSIONS_COLLECTION: &str = "chargingSessions";

/// Clasificación de velocidad de carga
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChargingSpeed {
    Slow,
    Fast,
    Rapid,
    #[serde(other)]
    Unknown,
}

impl ChargingSpeed {
    pub const KNOWN: [ChargingSpeed; 3] = [ChargingSpeed::Slow, ChargingSpeed::Fast, ChargingSpeed::Rapid];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChargingSpeed::Slow => "Slow",
            ChargingSpeed::Fast => "Fast",
            ChargingSpeed::Rapid => "Rapid",
            ChargingSpeed::Unknown => "Unknown",
        }
    }
}

/// Sesión de carga persistida
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChargingSession {
    pub id: String,
    pub user_id: String,
    pub user_vehicle_id: String,
    #[serde(default)]
    pub station_id: Option<String>,
    #[serde(default)]
    pub station_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub start_battery: Option<i32>,
    #[serde(default)]
    pub end_battery: Option<i32>,
    /// Texto numérico, p. ej. `"10.0"`
    #[serde(default, rename = "kWhAdded")]
    pub kwh_added: Option<String>,
    /// Texto de presentación, p. ej. `"₹350"`
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub charging_speed: Option<ChargingSpeed>,
    #[serde(default)]
    pub connector_type: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ChargingSession {
    /// Duración en minutos si hay inicio y fin
    pub fn duration_minutes(&self) -> Option<f64> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some((end - start).num_milliseconds() as f64 / 60_000.0),
            _ => None,
        }
    }
}

/// Campos de una sesión nueva
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChargingSession {
    pub user_id: String,
    pub user_vehicle_id: String,
    pub station_id: Option<String>,
    pub station_name: Option<String>,
    pub location: Option<String>,
    #[serde(with = "timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "timestamp::option")]
    pub end_time: Option<DateTime<Utc>>,
    pub start_battery: Option<i32>,
    pub end_battery: Option<i32>,
    #[serde(rename = "kWhAdded")]
    pub kwh_added: Option<String>,
    pub cost: Option<String>,
    pub charging_speed: Option<ChargingSpeed>,
    pub connector_type: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}
