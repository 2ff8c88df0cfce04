//! Cliente de búsqueda de lugares cercanos
//!
//! Habla con el endpoint nearby-search de Google Places y devuelve los
//! resultados como `RawPlace`, sin extras.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::models::{LatLng, RawPlace};
use crate::utils::errors::{AppError, AppResult};

/// Tipo de lugar buscado
pub const PLACE_TYPE: &str = "gas_station";
pub const RANK_BY: &str = "distance";

#[async_trait]
pub trait PlaceSearchProvider: Send + Sync {
    async fn nearby_search(&self, location: LatLng) -> AppResult<Vec<RawPlace>>;
}

#[derive(Debug, Deserialize)]
struct NearbyResponse {
    status: String,
    #[serde(default)]
    results: Vec<NearbyResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NearbyResult {
    place_id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    vicinity: Option<String>,
    #[serde(default)]
    geometry: Option<Geometry>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    user_ratings_total: Option<u32>,
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct Photo {
    photo_reference: String,
}

impl From<NearbyResult> for RawPlace {
    fn from(result: NearbyResult) -> Self {
        RawPlace {
            place_id: result.place_id,
            name: result.name,
            vicinity: result.vicinity,
            location: result.geometry.map(|g| g.location),
            rating: result.rating,
            user_ratings_total: result.user_ratings_total,
            photo_references: result.photos.into_iter().map(|p| p.photo_reference).collect(),
        }
    }
}

/// Parsear el cuerpo de nearby-search; `ZERO_RESULTS` es una lista vacía
pub fn parse_nearby_response(body: &str) -> AppResult<Vec<RawPlace>> {
    let response: NearbyResponse = serde_json::from_str(body)
        .map_err(|e| AppError::ExternalApi(format!("invalid place search response: {}", e)))?;

    match response.status.as_str() {
        "OK" | "ZERO_RESULTS" => Ok(response.results.into_iter().map(RawPlace::from).collect()),
        status => Err(AppError::ExternalApi(format!(
            "place search returned {}: {}",
            status,
            response.error_message.unwrap_or_default()
        ))),
    }
}

pub struct GooglePlacesClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GooglePlacesClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::Internal(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl PlaceSearchProvider for GooglePlacesClient {
    async fn nearby_search(&self, location: LatLng) -> AppResult<Vec<RawPlace>> {
        let location_param = format!("{},{}", location.lat, location.lng);
        log::info!("🗺️ Buscando estaciones cerca de {}", location_param);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("type", PLACE_TYPE),
                ("rankby", RANK_BY),
                ("location", location_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("place search request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ Place search falló con status {}: {}", status, error_text);
            return Err(AppError::ExternalApi(format!("place search failed: {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::ExternalApi(format!("place search body unreadable: {}", e)))?;

        parse_nearby_response(&body)
    }
}
