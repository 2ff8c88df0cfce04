//! Historial de carga de ejemplo
//!
//! Solo para el endpoint de demo del catálogo. Nunca se persiste ni entra en
//! las estadísticas reales.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::{ChargingSession, ChargingSpeed};

pub const SAMPLE_SESSION_COUNT: usize = 10;
pub const DEMO_USER_ID: &str = "demo";

const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Generar sesiones de ejemplo, más reciente primero
pub fn generate_sample_charging_history(
    vehicle_id: &str,
    rng: &mut impl Rng,
    now: DateTime<Utc>,
) -> Vec<ChargingSession> {
    let mut sessions: Vec<ChargingSession> = (0..SAMPLE_SESSION_COUNT)
        .map(|i| {
            let days_back = i as f64 * rng.gen_range(0.0..7.0);
            let start_time = now - Duration::milliseconds((days_back * MS_PER_DAY) as i64);
            let duration = Duration::minutes(rng.gen_range(15..105));
            let speed = ChargingSpeed::KNOWN[rng.gen_range(0..ChargingSpeed::KNOWN.len())];

            ChargingSession {
                id: format!("charge-{}-{}", vehicle_id, i),
                user_id: DEMO_USER_ID.to_string(),
                user_vehicle_id: vehicle_id.to_string(),
                station_id: None,
                station_name: Some(format!("EV Station {}", rng.gen_range(1..=100))),
                location: Some(format!("Location {}", i + 1)),
                start_time: Some(start_time),
                end_time: Some(start_time + duration),
                start_battery: Some(rng.gen_range(10..60)),
                end_battery: Some(rng.gen_range(60..100)),
                kwh_added: Some(format!("{:.1}", rng.gen_range(5.0..35.0))),
                cost: Some(format!("₹{:.0}", rng.gen_range(100.0..600.0))),
                charging_speed: Some(speed),
                connector_type: None,
                created_at: Some(start_time),
            }
        })
        .collect();

    sessions.sort_by(|a, b| b.start_time.cmp(&a.start_time));
    sessions
}
