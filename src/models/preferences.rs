//! Preferencias de conducción del usuario
//!
//! Un registro por usuario en `userPreferences`. Sin registro se usan los
//! valores por defecto.

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const USER_PREFERENCES_COLLECTION: &str = "userPreferences";
pub const DEFAULT_AVG_DAILY_KM: f64 = 40.0;
pub const DEFAULT_CHARGING_GOAL: i32 = 80;

fn default_avg_daily_km() -> f64 {
    DEFAULT_AVG_DAILY_KM
}

fn default_charging_time() -> String {
    "night".to_string()
}

fn default_charging_goal() -> i32 {
    DEFAULT_CHARGING_GOAL
}

fn enabled() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlannedTrip {
    #[validate(length(min = 1, max = 100))]
    pub destination: String,
    /// km
    #[validate(range(min = 0.0))]
    pub distance: f64,
}

/// Qué categorías de recordatorio quiere recibir el usuario
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSettings {
    #[serde(default = "enabled")]
    pub low_battery: bool,
    #[serde(default = "enabled")]
    pub proactive: bool,
    #[serde(default = "enabled")]
    pub weather: bool,
    #[serde(default = "enabled")]
    pub trip: bool,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            low_battery: true,
            proactive: true,
            weather: true,
            trip: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[validate(range(min = 1.0, max = 2000.0))]
    #[serde(default = "default_avg_daily_km")]
    pub avg_daily_km: f64,
    #[serde(default = "default_charging_time")]
    pub preferred_charging_time: String,
    #[serde(default)]
    pub reminder_settings: ReminderSettings,
    #[validate(range(min = 0, max = 100))]
    #[serde(default = "default_charging_goal")]
    pub charging_goal: i32,
    #[validate]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_trip: Option<PlannedTrip>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            avg_daily_km: DEFAULT_AVG_DAILY_KM,
            preferred_charging_time: default_charging_time(),
            reminder_settings: ReminderSettings::default(),
            charging_goal: DEFAULT_CHARGING_GOAL,
            planned_trip: None,
        }
    }
}
