//! Estaciones de carga
//!
//! `RawPlace` es el subconjunto que usamos de un resultado de búsqueda de
//! lugares; `EnrichedStation` le añade los extras de presentación.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawPlace {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub location: Option<LatLng>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub photo_references: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StationExtras {
    pub price: String,
    pub wait: String,
    pub availability: String,
    pub charging_speed: String,
    pub connector_types: Vec<String>,
    pub amenities: Vec<String>,
}

/// Origen de los extras de una estación
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExtrasSource {
    /// Tabla estática de estaciones conocidas
    Known,
    /// Generado con semilla explícita para demo
    Demo,
    None,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedStation {
    #[serde(flatten)]
    pub place: RawPlace,
    pub extras: Option<StationExtras>,
    pub extras_source: ExtrasSource,
}
