//! Configuración de cache
//!
//! Este módulo contiene la configuración para el cache de vehículos.

use chrono::Duration;

pub const DEFAULT_FRESHNESS_SECS: u64 = 5 * 60;
/// Límite de `chrono::Duration` en segundos
const MAX_FRESHNESS_SECS: u64 = (i64::MAX / 1000) as u64;

/// Configuración del cache
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Edad máxima de una entrada antes de tratarla como ausente
    pub freshness_window: Duration,
}

impl CacheConfig {
    pub fn with_ttl_secs(secs: u64) -> Self {
        Self {
            freshness_window: Duration::seconds(secs.min(MAX_FRESHNESS_SECS) as i64),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::with_ttl_secs(DEFAULT_FRESHNESS_SECS)
    }
}
