use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::dto::station_dto::NearbyQuery;
use crate::dto::ApiResponse;
use crate::models::EnrichedStation;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_station_router() -> Router<AppState> {
    Router::new().route("/api/stations/nearby", get(nearby_stations))
}

async fn nearby_stations(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<ApiResponse<Vec<EnrichedStation>>>, AppError> {
    let stations = state.stations.nearby_stations(query.lat, query.lng).await?;
    Ok(Json(ApiResponse::success(stations)))
}
