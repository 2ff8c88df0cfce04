use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::ChargingSpeed;

pub const DEFAULT_HISTORY_LIMIT: usize = 20;

// Request para registrar una sesión de carga
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogSessionRequest {
    pub station_id: Option<String>,
    pub station_name: Option<String>,
    pub location: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub start_battery: Option<i32>,
    pub end_battery: Option<i32>,
    #[serde(rename = "kWhAdded")]
    pub kwh_added: Option<String>,
    pub cost: Option<String>,
    pub charging_speed: Option<ChargingSpeed>,
    pub connector_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}
