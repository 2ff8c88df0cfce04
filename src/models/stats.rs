//! Estadísticas agregadas de carga

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChargingStats {
    pub total_sessions: usize,
    /// kWh con un decimal (`"15.5"`); sin sesiones es el número `0`
    #[serde(serialize_with = "serialize_total_kwh")]
    pub total_kwh: Decimal,
    /// Redondeado a la unidad
    pub total_cost: i64,
    /// Minutos, redondeado
    pub avg_session_time: i64,
    pub last_charge_date: Option<DateTime<Utc>>,
}

impl ChargingStats {
    pub fn empty() -> Self {
        Self {
            total_sessions: 0,
            total_kwh: Decimal::ZERO,
            total_cost: 0,
            avg_session_time: 0,
            last_charge_date: None,
        }
    }
}

/// Los totales agregados siempre llevan un decimal; el cero sin escala solo sale de `empty()`
fn serialize_total_kwh<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_zero() && value.scale() == 0 {
        serializer.serialize_u8(0)
    } else {
        serializer.serialize_str(&value.to_string())
    }
}
