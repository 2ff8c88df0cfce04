//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Todos los servicios comparten el mismo
//! store, el mismo reloj y la misma cache de vehículos.

use std::sync::Arc;

use crate::cache::VehicleCache;
use crate::clients::{GooglePlacesClient, PlaceSearchProvider};
use crate::config::environment::EnvironmentConfig;
use crate::database::DocumentStore;
use crate::repositories::{ChargingSessionRepository, PreferencesRepository, UserVehicleRepository};
use crate::services::{ChargingService, PreferencesService, ReminderService, StationService, VehicleService};
use crate::utils::clock::Clock;
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub vehicles: VehicleService,
    pub charging: ChargingService,
    pub preferences: PreferencesService,
    pub reminders: ReminderService,
    pub stations: StationService,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Construir el estado con el cliente de Places de la configuración
    pub fn new(config: EnvironmentConfig, store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>) -> AppResult<Self> {
        let provider: Option<Arc<dyn PlaceSearchProvider>> = match &config.places_api_key {
            Some(key) => Some(Arc::new(GooglePlacesClient::new(config.places_base_url.clone(), key.clone())?)),
            None => {
                log::warn!("⚠️ PLACES_API_KEY no definida, búsqueda de estaciones deshabilitada");
                None
            }
        };

        Ok(Self::with_provider(config, store, clock, provider))
    }

    pub fn with_provider(
        config: EnvironmentConfig,
        store: Arc<dyn DocumentStore>,
        clock: Arc<dyn Clock>,
        provider: Option<Arc<dyn PlaceSearchProvider>>,
    ) -> Self {
        let cache = Arc::new(VehicleCache::with_clock(config.cache.clone(), clock.clone()));

        let vehicles = VehicleService::new(UserVehicleRepository::new(store.clone()), cache, clock.clone());
        let charging = ChargingService::new(
            ChargingSessionRepository::new(store.clone()),
            vehicles.clone(),
            clock.clone(),
        );
        let preferences = PreferencesService::new(PreferencesRepository::new(store), clock.clone());
        let reminders = ReminderService::new(vehicles.clone(), charging.clone(), preferences.clone(), clock.clone());
        let stations = StationService::new(provider, config.demo_seed);

        Self {
            config,
            vehicles,
            charging,
            preferences,
            reminders,
            stations,
            clock,
        }
    }
}
