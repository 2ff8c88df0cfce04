use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DemoHistoryQuery {
    pub seed: Option<u64>,
}
