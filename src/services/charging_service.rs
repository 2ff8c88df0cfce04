//! Servicio de sesiones de carga
//!
//! Registra sesiones, devuelve historial y calcula estadísticas agregadas.
//! Al registrar una sesión con batería final se actualiza también la
//! batería actual del vehículo.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Arc;

use crate::dto::charging_dto::{LogSessionRequest, DEFAULT_HISTORY_LIMIT};
use crate::models::{ChargingSession, ChargingStats, NewChargingSession};
use crate::repositories::ChargingSessionRepository;
use crate::services::vehicle_service::VehicleService;
use crate::utils::clock::Clock;
use crate::utils::currency::{parse_cost, parse_energy};
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::ensure_battery_level;

/// Sesiones máximas que entran en las estadísticas
pub const STATS_SESSION_WINDOW: usize = 100;

#[derive(Clone)]
pub struct ChargingService {
    repository: ChargingSessionRepository,
    vehicles: VehicleService,
    clock: Arc<dyn Clock>,
}

impl ChargingService {
    pub fn new(repository: ChargingSessionRepository, vehicles: VehicleService, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            vehicles,
            clock,
        }
    }

    /// Registrar una sesión. Si la actualización de batería falla después de
    /// escribir la sesión, el error se propaga y la sesión queda escrita.
    pub async fn log_charging_session(
        &self,
        user_id: &str,
        user_vehicle_id: &str,
        request: LogSessionRequest,
    ) -> AppResult<String> {
        if let Some(level) = request.start_battery {
            ensure_battery_level("startBattery", level)?;
        }
        if let Some(level) = request.end_battery {
            ensure_battery_level("endBattery", level)?;
        }

        let now = self.clock.now();
        let start_time = request.start_time.unwrap_or(now);
        if let Some(end_time) = request.end_time {
            if end_time < start_time {
                return Err(validation_error("endTime", "must not be before startTime"));
            }
        }

        let session = NewChargingSession {
            user_id: user_id.to_string(),
            user_vehicle_id: user_vehicle_id.to_string(),
            station_id: request.station_id,
            station_name: request.station_name,
            location: request.location,
            start_time,
            end_time: request.end_time,
            start_battery: request.start_battery,
            end_battery: request.end_battery,
            kwh_added: request.kwh_added,
            cost: request.cost,
            charging_speed: request.charging_speed,
            connector_type: request.connector_type,
            created_at: now,
        };

        let id = self.repository.create(&session).await?;
        log::info!("⚡ Sesión {} registrada para vehículo {}", id, user_vehicle_id);

        if let Some(level) = session.end_battery {
            self.vehicles
                .update_battery(user_vehicle_id, level, Some(user_id))
                .await
                .map_err(|e| {
                    log::error!(
                        "❌ Sesión {} escrita pero la batería de {} no se actualizó: {}",
                        id,
                        user_vehicle_id,
                        e
                    );
                    e
                })?;
        }

        Ok(id)
    }

    /// Historial más reciente primero, truncado a `limit`
    pub async fn get_charging_history(
        &self,
        user_vehicle_id: &str,
        limit: Option<usize>,
    ) -> AppResult<Vec<ChargingSession>> {
        let mut sessions = self.repository.find_by_vehicle(user_vehicle_id).await?;
        sessions.truncate(limit.unwrap_or(DEFAULT_HISTORY_LIMIT));
        Ok(sessions)
    }

    pub async fn get_charging_stats(&self, user_vehicle_id: &str) -> AppResult<ChargingStats> {
        let sessions = self
            .get_charging_history(user_vehicle_id, Some(STATS_SESSION_WINDOW))
            .await?;
        Ok(aggregate_stats(&sessions))
    }
}

/// Suma sin overflow: los términos que desbordan se descartan con un warning
fn checked_total(field: &str, values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, |total, value| match total.checked_add(value) {
        Some(sum) => sum,
        None => {
            log::warn!("⚠️ {} desborda el total ({} + {}), se ignora", field, total, value);
            total
        }
    })
}

/// Agregar estadísticas sobre sesiones ya ordenadas (más reciente primero)
pub fn aggregate_stats(sessions: &[ChargingSession]) -> ChargingStats {
    if sessions.is_empty() {
        return ChargingStats::empty();
    }

    let total_kwh = checked_total("kWhAdded", sessions.iter().map(|s| parse_energy(s.kwh_added.as_deref())));
    let total_cost = checked_total("cost", sessions.iter().map(|s| parse_cost(s.cost.as_deref())));

    let durations: Vec<f64> = sessions.iter().filter_map(|s| s.duration_minutes()).collect();
    let avg_session_time = if durations.is_empty() {
        0.0
    } else {
        durations.iter().sum::<f64>() / durations.len() as f64
    };

    let mut total_kwh = total_kwh.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    total_kwh.rescale(1);

    let total_cost = total_cost.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let total_cost = total_cost.to_i64().unwrap_or(if total_cost.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    });

    ChargingStats {
        total_sessions: sessions.len(),
        total_kwh,
        total_cost,
        avg_session_time: avg_session_time.round() as i64,
        last_charge_date: sessions[0].start_time,
    }
}
