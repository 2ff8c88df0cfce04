//! Cache de vehículos por usuario
//!
//! Copia de solo lectura, con ventana de frescura, de la lista de vehículos
//! activos de cada usuario. Las escrituras van siempre al store y después
//! invalidan la entrada del usuario.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::cache_config::CacheConfig;
use crate::models::UserVehicle;
use crate::utils::clock::{Clock, SystemClock};

struct CacheEntry {
    vehicles: Arc<Vec<UserVehicle>>,
    stored_at: DateTime<Utc>,
}

pub struct VehicleCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    config: CacheConfig,
    clock: Arc<dyn Clock>,
}

impl VehicleCache {
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            config,
            clock,
        }
    }

    /// Lista cacheada si la entrada sigue fresca
    pub async fn get(&self, user_id: &str) -> Option<Arc<Vec<UserVehicle>>> {
        let entries = self.entries.read().await;
        let entry = entries.get(user_id)?;

        let age = self.clock.now() - entry.stored_at;
        if age < self.config.freshness_window {
            debug!("🚗 Vehicle cache HIT para {}", user_id);
            Some(Arc::clone(&entry.vehicles))
        } else {
            debug!("⏰ Vehicle cache EXPIRADO para {}", user_id);
            None
        }
    }

    /// Guardar la lista, sobrescribiendo cualquier entrada anterior
    pub async fn put(&self, user_id: &str, vehicles: Vec<UserVehicle>) -> Arc<Vec<UserVehicle>> {
        let vehicles = Arc::new(vehicles);
        let entry = CacheEntry {
            vehicles: Arc::clone(&vehicles),
            stored_at: self.clock.now(),
        };

        self.entries.write().await.insert(user_id.to_string(), entry);
        vehicles
    }

    pub async fn invalidate(&self, user_id: &str) {
        if self.entries.write().await.remove(user_id).is_some() {
            debug!("🗑️ Vehicle cache invalidado para {}", user_id);
        }
    }

    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        info!("🗑️ Vehicle cache vaciado ({} entradas)", entries.len());
        entries.clear();
    }

    /// Número de entradas, frescas o no
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
