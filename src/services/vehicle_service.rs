//! Servicio de vehículos del usuario
//!
//! Lecturas pasan por el `VehicleCache`; cualquier escritura va directa al
//! store y después invalida la entrada del usuario.

use std::sync::Arc;
use validator::Validate;

use crate::cache::VehicleCache;
use crate::dto::vehicle_dto::AddVehicleRequest;
use crate::models::user_vehicle::DEFAULT_BATTERY_LEVEL;
use crate::models::{find_model, NewUserVehicle, UserVehicle};
use crate::repositories::UserVehicleRepository;
use crate::utils::clock::Clock;
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{ensure_battery_level, ensure_nickname};

#[derive(Clone)]
pub struct VehicleService {
    repository: UserVehicleRepository,
    cache: Arc<VehicleCache>,
    clock: Arc<dyn Clock>,
}

impl VehicleService {
    pub fn new(repository: UserVehicleRepository, cache: Arc<VehicleCache>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            cache,
            clock,
        }
    }

    /// Añadir un vehículo del catálogo al usuario
    pub async fn add_vehicle(&self, user_id: &str, request: AddVehicleRequest) -> AppResult<String> {
        request.validate()?;

        let model = find_model(&request.vehicle_id)
            .ok_or_else(|| validation_error("vehicleId", "unknown vehicle model"))?;

        let nickname = request
            .nickname
            .map(|n| n.trim().to_string())
            .unwrap_or_else(|| model.name.to_string());
        ensure_nickname(&nickname)?;

        let current_battery = request.current_battery.unwrap_or(DEFAULT_BATTERY_LEVEL);
        ensure_battery_level("currentBattery", current_battery)?;

        let now = self.clock.now();
        let vehicle = NewUserVehicle {
            user_id: user_id.to_string(),
            vehicle_id: model.id.to_string(),
            nickname,
            purchase_date: request.purchase_date.unwrap_or(now),
            current_battery,
            total_mileage: request.total_mileage.unwrap_or(0.0),
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let id = self.repository.create(&vehicle).await?;
        self.cache.invalidate(user_id).await;

        log::info!("🚗 Vehículo {} ({}) añadido para usuario {}", id, model.id, user_id);
        Ok(id)
    }

    /// Vehículos activos del usuario, desde cache si la entrada está fresca
    pub async fn list_vehicles(&self, user_id: &str, force_refresh: bool) -> AppResult<Arc<Vec<UserVehicle>>> {
        if !force_refresh {
            if let Some(cached) = self.cache.get(user_id).await {
                log::debug!("📦 Devolviendo vehículos cacheados para usuario {}", user_id);
                return Ok(cached);
            }
        }

        log::info!("🔄 Consultando vehículos en el store para usuario {}", user_id);
        let vehicles = self.repository.find_active_by_user(user_id).await?;
        Ok(self.cache.put(user_id, vehicles).await)
    }

    /// Vehículo activo concreto del usuario
    pub async fn find_vehicle(&self, user_id: &str, user_vehicle_id: &str) -> AppResult<Option<UserVehicle>> {
        let vehicles = self.list_vehicles(user_id, false).await?;
        Ok(vehicles.iter().find(|v| v.id == user_vehicle_id).cloned())
    }

    pub async fn update_battery(
        &self,
        user_vehicle_id: &str,
        level: i32,
        user_id: Option<&str>,
    ) -> AppResult<()> {
        ensure_battery_level("batteryLevel", level)?;

        self.repository
            .set_battery(user_vehicle_id, level, self.clock.now())
            .await?;
        self.invalidate_for(user_id).await;

        log::info!("🔋 Batería de {} actualizada a {}%", user_vehicle_id, level);
        Ok(())
    }

    pub async fn rename_vehicle(
        &self,
        user_vehicle_id: &str,
        nickname: &str,
        user_id: Option<&str>,
    ) -> AppResult<()> {
        let nickname = nickname.trim();
        ensure_nickname(nickname)?;

        self.repository
            .set_nickname(user_vehicle_id, nickname, self.clock.now())
            .await?;
        self.invalidate_for(user_id).await;
        Ok(())
    }

    /// Borrado lógico: el historial de sesiones se conserva
    pub async fn remove_vehicle(&self, user_vehicle_id: &str, user_id: Option<&str>) -> AppResult<()> {
        self.repository
            .deactivate(user_vehicle_id, self.clock.now())
            .await?;
        self.invalidate_for(user_id).await;

        log::info!("🗑️ Vehículo {} desactivado", user_vehicle_id);
        Ok(())
    }

    /// Vaciar el cache de un usuario, o entero si no se indica
    pub async fn clear_cache(&self, user_id: Option<&str>) {
        match user_id {
            Some(user_id) => self.cache.invalidate(user_id).await,
            None => self.cache.clear().await,
        }
    }

    async fn invalidate_for(&self, user_id: Option<&str>) {
        if let Some(user_id) = user_id {
            self.cache.invalidate(user_id).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheConfig;
    use crate::database::{DocumentStore, MemoryDocumentStore};
    use crate::models::user_vehicle::USER_VEHICLES_COLLECTION;
    use crate::utils::clock::ManualClock;
    use crate::utils::errors::AppError;
    use chrono::{Duration, TimeZone, Utc};

    struct Fixture {
        store: Arc<MemoryDocumentStore>,
        clock: ManualClock,
        service: VehicleService,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryDocumentStore::new());
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
        let clock_handle: Arc<dyn Clock> = Arc::new(clock.clone());
        let cache = Arc::new(VehicleCache::with_clock(CacheConfig::default(), clock_handle.clone()));
        let dyn_store: Arc<dyn DocumentStore> = store.clone();
        let service = VehicleService::new(UserVehicleRepository::new(dyn_store), cache, clock_handle);
        Fixture { store, clock, service }
    }

    fn add_request(vehicle_id: &str) -> AddVehicleRequest {
        AddVehicleRequest {
            vehicle_id: vehicle_id.to_string(),
            nickname: None,
            purchase_date: None,
            current_battery: None,
            total_mileage: None,
        }
    }

    #[tokio::test]
    async fn test_add_vehicle_defaults() {
        let f = fixture();
        let id = f.service.add_vehicle("u1", add_request("mg-zs-ev")).await.unwrap();

        let vehicles = f.service.list_vehicles("u1", false).await.unwrap();
        assert_eq!(vehicles.len(), 1);
        let vehicle = &vehicles[0];
        assert_eq!(vehicle.id, id);
        assert_eq!(vehicle.nickname, "MG ZS EV");
        assert_eq!(vehicle.current_battery, 100);
        assert!(vehicle.is_active);
    }

    #[tokio::test]
    async fn test_add_vehicle_keeps_zero_battery() {
        let f = fixture();
        let mut request = add_request("tata-nexon-ev");
        request.current_battery = Some(0);
        f.service.add_vehicle("u1", request).await.unwrap();

        let vehicles = f.service.list_vehicles("u1", false).await.unwrap();
        assert_eq!(vehicles[0].current_battery, 0);
    }

    #[tokio::test]
    async fn test_add_vehicle_rejects_unknown_model_and_blank_nickname() {
        let f = fixture();
        let unknown = f.service.add_vehicle("u1", add_request("delorean")).await;
        assert!(matches!(unknown, Err(AppError::Validation(_))));

        let mut blank = add_request("tata-nexon-ev");
        blank.nickname = Some("   ".to_string());
        let blank = f.service.add_vehicle("u1", blank).await;
        assert!(matches!(blank, Err(AppError::Validation(_))));

        assert_eq!(f.store.insert_count(), 0);
    }

    #[tokio::test]
    async fn test_list_vehicles_newest_first_and_active_only() {
        let f = fixture();
        let first = f.service.add_vehicle("u1", add_request("tata-nexon-ev")).await.unwrap();
        f.clock.advance(Duration::seconds(10));
        let second = f.service.add_vehicle("u1", add_request("byd-atto-3")).await.unwrap();
        f.service.add_vehicle("u2", add_request("hyundai-kona")).await.unwrap();

        let ids: Vec<_> = f
            .service
            .list_vehicles("u1", false)
            .await
            .unwrap()
            .iter()
            .map(|v| v.id.clone())
            .collect();
        assert_eq!(ids, vec![second.clone(), first.clone()]);

        f.service.remove_vehicle(&second, Some("u1")).await.unwrap();
        let remaining = f.service.list_vehicles("u1", false).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, first);

        // borrado lógico: el documento sigue en el store
        let stored = f.store.get(USER_VEHICLES_COLLECTION, &second).await.unwrap();
        assert_eq!(stored.fields["isActive"], serde_json::json!(false));
    }

    #[tokio::test]
    async fn test_cache_hit_within_window() {
        let f = fixture();
        f.service.add_vehicle("u1", add_request("tata-nexon-ev")).await.unwrap();

        let first = f.service.list_vehicles("u1", false).await.unwrap();
        f.clock.advance(Duration::minutes(4));
        let second = f.service.list_vehicles("u1", false).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(f.store.query_count(), 1);
    }

    #[tokio::test]
    async fn test_cache_refetch_after_window() {
        let f = fixture();
        f.service.add_vehicle("u1", add_request("tata-nexon-ev")).await.unwrap();

        let first = f.service.list_vehicles("u1", false).await.unwrap();
        f.clock.advance(Duration::minutes(5) + Duration::milliseconds(1));
        let second = f.service.list_vehicles("u1", false).await.unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(f.store.query_count(), 2);
    }

    #[tokio::test]
    async fn test_force_refresh_bypasses_cache() {
        let f = fixture();
        f.service.list_vehicles("u1", false).await.unwrap();
        f.service.list_vehicles("u1", true).await.unwrap();
        assert_eq!(f.store.query_count(), 2);
    }

    #[tokio::test]
    async fn test_write_invalidates_cache() {
        let f = fixture();
        let id = f.service.add_vehicle("u1", add_request("tata-nexon-ev")).await.unwrap();
        f.service.list_vehicles("u1", false).await.unwrap();

        f.service.update_battery(&id, 42, Some("u1")).await.unwrap();
        let vehicles = f.service.list_vehicles("u1", false).await.unwrap();

        assert_eq!(f.store.query_count(), 2);
        assert_eq!(vehicles[0].current_battery, 42);
    }

    #[tokio::test]
    async fn test_update_battery_without_user_keeps_cache() {
        let f = fixture();
        let id = f.service.add_vehicle("u1", add_request("tata-nexon-ev")).await.unwrap();
        f.service.list_vehicles("u1", false).await.unwrap();

        f.service.update_battery(&id, 30, None).await.unwrap();
        let vehicles = f.service.list_vehicles("u1", false).await.unwrap();

        assert_eq!(f.store.query_count(), 1);
        assert_eq!(vehicles[0].current_battery, 100);
    }

    #[tokio::test]
    async fn test_update_battery_validates_range_without_writing() {
        let f = fixture();
        let id = f.service.add_vehicle("u1", add_request("tata-nexon-ev")).await.unwrap();

        for level in [-1, 101, 250] {
            let result = f.service.update_battery(&id, level, Some("u1")).await;
            assert!(matches!(result, Err(AppError::Validation(_))), "level {}", level);
        }
        assert_eq!(f.store.update_count(), 0);

        for level in [0, 55, 100] {
            f.service.update_battery(&id, level, Some("u1")).await.unwrap();
        }
        assert_eq!(f.store.update_count(), 3);
    }

    #[tokio::test]
    async fn test_rename_vehicle() {
        let f = fixture();
        let id = f.service.add_vehicle("u1", add_request("tata-nexon-ev")).await.unwrap();

        assert!(matches!(
            f.service.rename_vehicle(&id, "", Some("u1")).await,
            Err(AppError::Validation(_))
        ));

        f.service.rename_vehicle(&id, "  Daily  ", Some("u1")).await.unwrap();
        let vehicle = f.service.find_vehicle("u1", &id).await.unwrap().unwrap();
        assert_eq!(vehicle.nickname, "Daily");
    }

    #[tokio::test]
    async fn test_update_unknown_vehicle_is_not_found() {
        let f = fixture();
        let result = f.service.update_battery("missing", 50, None).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_clear_cache() {
        let f = fixture();
        f.service.list_vehicles("u1", false).await.unwrap();
        f.service.list_vehicles("u2", false).await.unwrap();

        f.service.clear_cache(Some("u1")).await;
        f.service.list_vehicles("u1", false).await.unwrap();
        f.service.list_vehicles("u2", false).await.unwrap();
        assert_eq!(f.store.query_count(), 3);

        f.service.clear_cache(None).await;
        f.service.list_vehicles("u2", false).await.unwrap();
        assert_eq!(f.store.query_count(), 4);
    }
}
