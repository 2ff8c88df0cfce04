use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;

use ev_charging_companion::cache::{CacheConfig, VehicleCache};
use ev_charging_companion::database::{Document, DocumentStore, MemoryDocumentStore, Query, StoreError, StoredDocument};
use ev_charging_companion::dto::charging_dto::LogSessionRequest;
use ev_charging_companion::dto::vehicle_dto::AddVehicleRequest;
use ev_charging_companion::models::user_vehicle::USER_VEHICLES_COLLECTION;
use ev_charging_companion::repositories::{ChargingSessionRepository, UserVehicleRepository};
use ev_charging_companion::services::{ChargingService, VehicleService};
use ev_charging_companion::utils::{AppError, Clock, ManualClock};

/// Store que falla las actualizaciones de vehículos
struct FailingVehicleUpdates {
    inner: MemoryDocumentStore,
}

#[async_trait]
impl DocumentStore for FailingVehicleUpdates {
    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<StoredDocument>, StoreError> {
        self.inner.query(collection, query).await
    }

    async fn insert(&self, collection: &str, fields: Document) -> Result<String, StoreError> {
        self.inner.insert(collection, fields).await
    }

    async fn update(&self, collection: &str, id: &str, fields: Document) -> Result<(), StoreError> {
        if collection == USER_VEHICLES_COLLECTION {
            return Err(StoreError::Unavailable("vehicle writes disabled".to_string()));
        }
        self.inner.update(collection, id, fields).await
    }
}

fn services(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>) -> (VehicleService, ChargingService) {
    let cache = Arc::new(VehicleCache::with_clock(CacheConfig::default(), clock.clone()));
    let vehicles = VehicleService::new(UserVehicleRepository::new(store.clone()), cache, clock.clone());
    let charging = ChargingService::new(ChargingSessionRepository::new(store), vehicles.clone(), clock);
    (vehicles, charging)
}

fn add_request(model: &str) -> AddVehicleRequest {
    AddVehicleRequest {
        vehicle_id: model.to_string(),
        nickname: None,
        purchase_date: None,
        current_battery: Some(35),
        total_mileage: None,
    }
}

#[tokio::test]
async fn test_logged_session_updates_current_battery() {
    let clock: Arc<dyn Clock> = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 10, 7, 0, 0).unwrap()));
    let store = Arc::new(MemoryDocumentStore::new());
    let (vehicles, charging) = services(store.clone(), clock);

    let id = vehicles.add_vehicle("u1", add_request("byd-atto-3")).await.unwrap();
    assert_eq!(vehicles.list_vehicles("u1", false).await.unwrap()[0].current_battery, 35);

    let request = LogSessionRequest {
        end_battery: Some(80),
        kwh_added: Some("20.0".to_string()),
        ..LogSessionRequest::default()
    };
    charging.log_charging_session("u1", &id, request).await.unwrap();

    let listed = vehicles.list_vehicles("u1", false).await.unwrap();
    assert_eq!(listed[0].current_battery, 80);

    let history = charging.get_charging_history(&id, None).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].end_battery, Some(80));
}

#[tokio::test]
async fn test_session_without_end_battery_leaves_vehicle_untouched() {
    let clock: Arc<dyn Clock> = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 10, 7, 0, 0).unwrap()));
    let store = Arc::new(MemoryDocumentStore::new());
    let (vehicles, charging) = services(store.clone(), clock);

    let id = vehicles.add_vehicle("u1", add_request("mg-zs-ev")).await.unwrap();
    charging
        .log_charging_session("u1", &id, LogSessionRequest::default())
        .await
        .unwrap();

    assert_eq!(store.update_count(), 0);
    assert_eq!(vehicles.list_vehicles("u1", true).await.unwrap()[0].current_battery, 35);
}

#[tokio::test]
async fn test_failed_battery_update_keeps_session_and_reports_error() {
    let clock: Arc<dyn Clock> = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 10, 7, 0, 0).unwrap()));
    let store = Arc::new(FailingVehicleUpdates {
        inner: MemoryDocumentStore::new(),
    });
    let (vehicles, charging) = services(store.clone(), clock);

    let id = vehicles.add_vehicle("u1", add_request("hyundai-kona")).await.unwrap();
    let request = LogSessionRequest {
        end_battery: Some(90),
        ..LogSessionRequest::default()
    };

    let result = charging.log_charging_session("u1", &id, request).await;
    assert!(matches!(result, Err(AppError::StoreWrite(_))));

    let history = charging.get_charging_history(&id, None).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(vehicles.list_vehicles("u1", true).await.unwrap()[0].current_battery, 35);
}

#[tokio::test]
async fn test_history_is_newest_first_and_limited() {
    let manual = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 10, 7, 0, 0).unwrap()));
    let clock: Arc<dyn Clock> = manual.clone();
    let store = Arc::new(MemoryDocumentStore::new());
    let (vehicles, charging) = services(store, clock);

    let id = vehicles.add_vehicle("u1", add_request("tesla-model-3")).await.unwrap();
    for _ in 0..25 {
        charging
            .log_charging_session("u1", &id, LogSessionRequest::default())
            .await
            .unwrap();
        manual.advance(Duration::hours(6));
    }

    let history = charging.get_charging_history(&id, None).await.unwrap();
    assert_eq!(history.len(), 20);
    assert!(history.windows(2).all(|pair| pair[0].start_time > pair[1].start_time));

    let limited = charging.get_charging_history(&id, Some(3)).await.unwrap();
    assert_eq!(limited.len(), 3);
    assert_eq!(limited[0], history[0]);

    let stats = charging.get_charging_stats(&id).await.unwrap();
    assert_eq!(stats.total_sessions, 25);
    assert_eq!(stats.last_charge_date, history[0].start_time);
}
