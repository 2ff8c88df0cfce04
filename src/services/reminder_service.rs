//! Recordatorios inteligentes
//!
//! `generate_smart_reminders` es una función pura de (modelo, historial,
//! preferencias, fecha). `ReminderService` solo reúne los datos del usuario
//! y le pasa la fecha del reloj.

use chrono::{Datelike, NaiveDate};
use std::sync::Arc;

use crate::models::{
    find_model, ChargingSession, ReminderKind, ReminderPriority, SmartReminder, UserPreferences,
    VehicleModel,
};
use crate::services::charging_service::ChargingService;
use crate::services::preferences_service::PreferencesService;
use crate::services::vehicle_service::VehicleService;
use crate::utils::clock::Clock;
use crate::utils::errors::{not_found_error, AppError, AppResult};

/// Batería asumida cuando el historial no la indica
pub const DEFAULT_CURRENT_BATTERY: f64 = 50.0;
pub const LOW_BATTERY_THRESHOLD: f64 = 25.0;
pub const PROACTIVE_THRESHOLD: f64 = 60.0;
pub const WINTER_THRESHOLD: f64 = 70.0;
/// Margen de seguridad para viajes, en km
pub const TRIP_BUFFER_KM: f64 = 50.0;

fn is_winter(date: NaiveDate) -> bool {
    matches!(date.month(), 12 | 1 | 2)
}

pub fn generate_smart_reminders(
    vehicle: &VehicleModel,
    history: &[ChargingSession],
    preferences: Option<&UserPreferences>,
    today: NaiveDate,
) -> Vec<SmartReminder> {
    let defaults = UserPreferences::default();
    let preferences = preferences.unwrap_or(&defaults);
    let settings = &preferences.reminder_settings;

    let current_battery = history
        .first()
        .and_then(|session| session.end_battery)
        .map(f64::from)
        .unwrap_or(DEFAULT_CURRENT_BATTERY);
    let remaining_range = (current_battery / 100.0) * f64::from(vehicle.range);

    let mut reminders = Vec::new();

    if settings.low_battery && current_battery < LOW_BATTERY_THRESHOLD {
        reminders.push(SmartReminder {
            kind: ReminderKind::Urgent,
            title: "Low Battery Alert!".to_string(),
            message: format!(
                "Your {} is at {}%. Find a charging station nearby.",
                vehicle.name, current_battery
            ),
            icon: "🔋",
            priority: ReminderPriority::High,
            days_until_empty: None,
        });
    }

    if settings.proactive && current_battery < PROACTIVE_THRESHOLD {
        let days_until_empty = (remaining_range / preferences.avg_daily_km).floor().max(0.0) as u32;
        reminders.push(SmartReminder {
            kind: ReminderKind::Proactive,
            title: "Plan Your Next Charge".to_string(),
            message: format!(
                "With {} days of driving left, consider charging to {}% tonight.",
                days_until_empty, preferences.charging_goal
            ),
            icon: "⚡",
            priority: ReminderPriority::Medium,
            days_until_empty: Some(days_until_empty),
        });
    }

    if let Some(trip) = preferences.planned_trip.as_ref().filter(|_| settings.trip) {
        if remaining_range < trip.distance + TRIP_BUFFER_KM {
            reminders.push(SmartReminder {
                kind: ReminderKind::Trip,
                title: "Charge Before Your Trip".to_string(),
                message: format!(
                    "Your {} trip needs {}km. Charge to 90% for safety.",
                    trip.destination, trip.distance
                ),
                icon: "🗺️",
                priority: ReminderPriority::High,
                days_until_empty: None,
            });
        }
    }

    if settings.weather && is_winter(today) && current_battery < WINTER_THRESHOLD {
        reminders.push(SmartReminder {
            kind: ReminderKind::Weather,
            title: "Winter Driving Reminder".to_string(),
            message: "Cold weather reduces range by 20%. Keep battery above 70% in winter.".to_string(),
            icon: "❄️",
            priority: ReminderPriority::Medium,
            days_until_empty: None,
        });
    }

    reminders
}

#[derive(Clone)]
pub struct ReminderService {
    vehicles: VehicleService,
    charging: ChargingService,
    preferences: PreferencesService,
    clock: Arc<dyn Clock>,
}

impl ReminderService {
    pub fn new(
        vehicles: VehicleService,
        charging: ChargingService,
        preferences: PreferencesService,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            vehicles,
            charging,
            preferences,
            clock,
        }
    }

    /// Recordatorios para un vehículo activo del usuario
    pub async fn reminders_for_vehicle(&self, user_id: &str, user_vehicle_id: &str) -> AppResult<Vec<SmartReminder>> {
        let vehicle = self
            .vehicles
            .find_vehicle(user_id, user_vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", user_vehicle_id))?;

        let model = find_model(&vehicle.vehicle_id).ok_or_else(|| {
            AppError::Internal(format!("vehicle model '{}' missing from catalog", vehicle.vehicle_id))
        })?;

        let history = self.charging.get_charging_history(user_vehicle_id, None).await?;
        let preferences = self.preferences.get_preferences(user_id).await?;
        let today = self.clock.now().date_naive();

        Ok(generate_smart_reminders(model, &history, Some(&preferences), today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlannedTrip, ReminderSettings, EV_MODELS};

    fn model_with_range(range: u32) -> VehicleModel {
        VehicleModel {
            range,
            ..EV_MODELS[0].clone()
        }
    }

    fn session_ending_at(end_battery: Option<i32>) -> ChargingSession {
        ChargingSession {
            id: "s1".to_string(),
            user_id: "u1".to_string(),
            user_vehicle_id: "v1".to_string(),
            station_id: None,
            station_name: None,
            location: None,
            start_time: None,
            end_time: None,
            start_battery: None,
            end_battery,
            kwh_added: None,
            cost: None,
            charging_speed: None,
            connector_type: None,
            created_at: None,
        }
    }

    fn summer() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
    }

    fn winter() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn kinds(reminders: &[SmartReminder]) -> Vec<ReminderKind> {
        reminders.iter().map(|r| r.kind).collect()
    }

    #[test]
    fn test_no_history_defaults_to_fifty_percent() {
        let reminders = generate_smart_reminders(&model_with_range(300), &[], None, summer());
        assert_eq!(kinds(&reminders), vec![ReminderKind::Proactive]);
        assert_eq!(reminders[0].days_until_empty, Some(3));
        assert_eq!(reminders[0].priority, ReminderPriority::Medium);
    }

    #[test]
    fn test_missing_end_battery_defaults_to_fifty_percent() {
        let history = vec![session_ending_at(None)];
        let reminders = generate_smart_reminders(&model_with_range(300), &history, None, summer());
        assert_eq!(reminders[0].days_until_empty, Some(3));
    }

    #[test]
    fn test_all_four_rules_in_order() {
        let history = vec![session_ending_at(Some(10))];
        let preferences = UserPreferences {
            planned_trip: Some(PlannedTrip {
                destination: "Jaipur".to_string(),
                distance: 280.0,
            }),
            ..UserPreferences::default()
        };

        let reminders = generate_smart_reminders(&model_with_range(300), &history, Some(&preferences), winter());
        assert_eq!(
            kinds(&reminders),
            vec![
                ReminderKind::Urgent,
                ReminderKind::Proactive,
                ReminderKind::Trip,
                ReminderKind::Weather
            ]
        );
        assert_eq!(reminders[0].priority, ReminderPriority::High);
        assert_eq!(reminders[2].priority, ReminderPriority::High);
        assert!(reminders[2].message.contains("Jaipur"));
        assert_eq!(reminders[1].days_until_empty, Some(0));
    }

    #[test]
    fn test_high_battery_produces_nothing() {
        let history = vec![session_ending_at(Some(90))];
        let reminders = generate_smart_reminders(&model_with_range(300), &history, None, winter());
        assert!(reminders.is_empty());
    }

    #[test]
    fn test_winter_rule_between_sixty_and_seventy() {
        let history = vec![session_ending_at(Some(65))];
        let model = model_with_range(300);
        assert_eq!(
            kinds(&generate_smart_reminders(&model, &history, None, winter())),
            vec![ReminderKind::Weather]
        );
        assert!(generate_smart_reminders(&model, &history, None, summer()).is_empty());

        let december = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert!(is_winter(december));
        assert!(!is_winter(march));
    }

    #[test]
    fn test_trip_rule_uses_buffer() {
        // 80% de 300 km = 240 km de autonomía
        let history = vec![session_ending_at(Some(80))];
        let model = model_with_range(300);
        let trip = |distance: f64| UserPreferences {
            planned_trip: Some(PlannedTrip {
                destination: "Agra".to_string(),
                distance,
            }),
            ..UserPreferences::default()
        };

        let short = generate_smart_reminders(&model, &history, Some(&trip(190.0)), summer());
        assert!(short.is_empty());

        let long = generate_smart_reminders(&model, &history, Some(&trip(191.0)), summer());
        assert_eq!(kinds(&long), vec![ReminderKind::Trip]);
    }

    #[test]
    fn test_avg_daily_km_changes_days_left() {
        let preferences = UserPreferences {
            avg_daily_km: 25.0,
            ..UserPreferences::default()
        };
        let reminders = generate_smart_reminders(&model_with_range(300), &[], Some(&preferences), summer());
        assert_eq!(reminders[0].days_until_empty, Some(6));
    }

    #[test]
    fn test_proactive_message_uses_charging_goal() {
        let reminders = generate_smart_reminders(&model_with_range(300), &[], None, summer());
        assert_eq!(
            reminders[0].message,
            "With 3 days of driving left, consider charging to 80% tonight."
        );

        let preferences = UserPreferences {
            charging_goal: 90,
            ..UserPreferences::default()
        };
        let reminders = generate_smart_reminders(&model_with_range(300), &[], Some(&preferences), summer());
        assert!(reminders[0].message.ends_with("consider charging to 90% tonight."));
    }

    #[test]
    fn test_disabled_categories_are_skipped() {
        let preferences = UserPreferences {
            reminder_settings: ReminderSettings {
                proactive: false,
                ..ReminderSettings::default()
            },
            ..UserPreferences::default()
        };
        let history = vec![session_ending_at(Some(20))];
        let reminders = generate_smart_reminders(&model_with_range(300), &history, Some(&preferences), summer());
        assert_eq!(kinds(&reminders), vec![ReminderKind::Urgent]);
    }
}
