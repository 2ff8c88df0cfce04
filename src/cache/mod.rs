//! Cache
//!
//! Este módulo contiene el cache en memoria de vehículos por usuario.

pub mod cache_config;
pub mod vehicle_cache;

pub use cache_config::CacheConfig;
pub use vehicle_cache::VehicleCache;
