//! Enriquecimiento de estaciones
//!
//! Añade precio, espera, conectores y servicios a los resultados de la
//! búsqueda de lugares. Las estaciones conocidas usan la tabla estática; las
//! demás solo reciben extras de demo si hay semilla configurada.

use lazy_static::lazy_static;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::PlaceSearchProvider;
use crate::models::{EnrichedStation, ExtrasSource, LatLng, RawPlace, StationExtras};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::ensure_coordinates;

const PRICES: &[&str] = &["₹12/kWh", "₹14/kWh", "₹15/kWh", "₹16/kWh", "₹18/kWh", "₹20/kWh"];
const WAIT_TIMES: &[&str] = &["0 min", "5 min", "10 min", "15 min", "20 min", "25 min"];
const AVAILABILITY: &[&str] = &["Available", "Busy", "Occupied", "Available"];
const CHARGING_SPEEDS: &[&str] = &["Slow", "Fast", "Rapid"];
const CONNECTORS: &[&str] = &["Type 2", "CCS", "CHAdeMO", "Tesla Supercharger"];
const AMENITIES: &[&str] = &[
    "WiFi",
    "Cafe",
    "Restrooms",
    "Parking",
    "ATM",
    "Shopping",
    "Food Court",
    "Waiting Area",
];

fn extras(
    price: &str,
    wait: &str,
    availability: &str,
    charging_speed: &str,
    connector_types: &[&str],
    amenities: &[&str],
) -> StationExtras {
    StationExtras {
        price: price.to_string(),
        wait: wait.to_string(),
        availability: availability.to_string(),
        charging_speed: charging_speed.to_string(),
        connector_types: connector_types.iter().map(|c| c.to_string()).collect(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
    }
}

lazy_static! {
    /// Extras de estaciones conocidas, por `place_id`
    static ref STATION_EXTRAS: HashMap<&'static str, StationExtras> = {
        let mut m = HashMap::new();
        m.insert(
            "ChIJ3dAFHG_7DDkR3uGgvUTpl1E",
            extras("₹15/kWh", "20 min", "Available", "Fast", &["Type 2", "CCS"], &["WiFi", "Cafe", "Restrooms"]),
        );
        m.insert(
            "ChIJPTMLHm_7DDkRtQ9d9gT3HXE",
            extras("₹12/kWh", "5 min", "Busy", "Slow", &["Type 2"], &["WiFi", "Parking"]),
        );
        m.insert(
            "ChIJVbcWCmb7DDkRgwFPr6EbCmo",
            extras(
                "₹18/kWh",
                "0 min",
                "Available",
                "Rapid",
                &["CCS", "CHAdeMO", "Type 2"],
                &["WiFi", "Cafe", "Restrooms", "Shopping"],
            ),
        );
        m.insert(
            "ChIJedUrQ3_7DDkRrrPdxbAyyNs",
            extras("₹14/kWh", "15 min", "Available", "Fast", &["Type 2", "CCS"], &["WiFi", "ATM"]),
        );
        m.insert(
            "ChIJcVVPMOBSDDkRWRx8be8wW6c",
            extras(
                "₹16/kWh",
                "10 min",
                "Available",
                "Fast",
                &["Type 2", "CCS"],
                &["WiFi", "Cafe", "Restrooms", "Parking"],
            ),
        );
        m
    };
}

pub fn known_station_extras(place_id: &str) -> Option<StationExtras> {
    STATION_EXTRAS.get(place_id).cloned()
}

fn pick(rng: &mut impl Rng, options: &[&str]) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}

fn pick_distinct(rng: &mut impl Rng, options: &[&str], max: usize) -> Vec<String> {
    let count = rng.gen_range(1..=max.min(options.len()));
    options
        .choose_multiple(rng, count)
        .map(|value| value.to_string())
        .collect()
}

/// Extras aleatorios de demo: 1-3 conectores y 1-4 servicios distintos
pub fn generate_demo_extras(rng: &mut impl Rng) -> StationExtras {
    StationExtras {
        price: pick(rng, PRICES),
        wait: pick(rng, WAIT_TIMES),
        availability: pick(rng, AVAILABILITY),
        charging_speed: pick(rng, CHARGING_SPEEDS),
        connector_types: pick_distinct(rng, CONNECTORS, 3),
        amenities: pick_distinct(rng, AMENITIES, 4),
    }
}

/// Semilla estable por estación, independiente del orden de los resultados
fn station_seed(seed: u64, place_id: &str) -> u64 {
    place_id
        .bytes()
        .fold(seed ^ 0xcbf2_9ce4_8422_2325, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
        })
}

/// Enriquecer resultados crudos; sin semilla, las estaciones desconocidas quedan sin extras
pub fn enrich_stations(places: Vec<RawPlace>, demo_seed: Option<u64>) -> Vec<EnrichedStation> {
    places
        .into_iter()
        .map(|place| {
            if let Some(extras) = known_station_extras(&place.place_id) {
                return EnrichedStation {
                    place,
                    extras: Some(extras),
                    extras_source: ExtrasSource::Known,
                };
            }

            match demo_seed {
                Some(seed) => {
                    let mut rng = StdRng::seed_from_u64(station_seed(seed, &place.place_id));
                    EnrichedStation {
                        extras: Some(generate_demo_extras(&mut rng)),
                        place,
                        extras_source: ExtrasSource::Demo,
                    }
                }
                None => EnrichedStation {
                    place,
                    extras: None,
                    extras_source: ExtrasSource::None,
                },
            }
        })
        .collect()
}

#[derive(Clone)]
pub struct StationService {
    provider: Option<Arc<dyn PlaceSearchProvider>>,
    demo_seed: Option<u64>,
}

impl StationService {
    pub fn new(provider: Option<Arc<dyn PlaceSearchProvider>>, demo_seed: Option<u64>) -> Self {
        Self { provider, demo_seed }
    }

    pub async fn nearby_stations(&self, lat: f64, lng: f64) -> AppResult<Vec<EnrichedStation>> {
        ensure_coordinates(lat, lng)?;

        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| AppError::ExternalApi("place search provider not configured".to_string()))?;

        let places = provider.nearby_search(LatLng { lat, lng }).await?;
        log::info!("📍 {} estaciones cerca de ({}, {})", places.len(), lat, lng);
        Ok(enrich_stations(places, self.demo_seed))
    }
}
