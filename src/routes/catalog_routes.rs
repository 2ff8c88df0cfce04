use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::dto::station_dto::DemoHistoryQuery;
use crate::dto::ApiResponse;
use crate::models::{find_model, ChargingSession, VehicleModel, EV_MODELS};
use crate::services::generate_sample_charging_history;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/api/catalog", get(list_models))
        .route("/api/catalog/:model_id", get(get_model))
        .route("/api/catalog/:model_id/demo-history", get(demo_history))
}

async fn list_models() -> Json<ApiResponse<&'static [VehicleModel]>> {
    Json(ApiResponse::success(EV_MODELS))
}

async fn get_model(Path(model_id): Path<String>) -> Result<Json<ApiResponse<&'static VehicleModel>>, AppError> {
    let model = find_model(&model_id).ok_or_else(|| not_found_error("Vehicle model", &model_id))?;
    Ok(Json(ApiResponse::success(model)))
}

/// Historial de ejemplo; la semilla de la query tiene prioridad sobre DEMO_SEED
async fn demo_history(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
    Query(query): Query<DemoHistoryQuery>,
) -> Result<Json<ApiResponse<Vec<ChargingSession>>>, AppError> {
    let model = find_model(&model_id).ok_or_else(|| not_found_error("Vehicle model", &model_id))?;
    let seed = query
        .seed
        .or(state.config.demo_seed)
        .ok_or_else(|| AppError::BadRequest("a seed is required (?seed= or DEMO_SEED)".to_string()))?;

    let mut rng = StdRng::seed_from_u64(seed);
    let sessions = generate_sample_charging_history(model.id, &mut rng, state.clock.now());
    Ok(Json(ApiResponse::success(sessions)))
}
