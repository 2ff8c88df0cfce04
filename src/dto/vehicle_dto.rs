use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

// Request para añadir un vehículo
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddVehicleRequest {
    /// Identificador del modelo en el catálogo
    #[validate(length(min = 1))]
    pub vehicle_id: String,
    #[validate(length(max = 50))]
    pub nickname: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
    #[validate(range(min = 0, max = 100))]
    pub current_battery: Option<i32>,
    #[validate(range(min = 0.0))]
    pub total_mileage: Option<f64>,
}

// Request para actualizar batería
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBatteryRequest {
    pub battery_level: i32,
}

// Request para cambiar el apodo
#[derive(Debug, Clone, Deserialize)]
pub struct RenameVehicleRequest {
    pub nickname: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListVehiclesQuery {
    #[serde(default)]
    pub force_refresh: bool,
}
