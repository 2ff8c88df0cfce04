use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::dto::charging_dto::{HistoryQuery, LogSessionRequest};
use crate::dto::{ApiResponse, CreatedResponse};
use crate::models::{ChargingSession, ChargingStats};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_charging_router() -> Router<AppState> {
    Router::new()
        .route("/api/users/:user_id/vehicles/:id/sessions", post(log_session))
        .route("/api/vehicles/:id/sessions", get(get_history))
        .route("/api/vehicles/:id/stats", get(get_stats))
}

async fn log_session(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(String, String)>,
    Json(request): Json<LogSessionRequest>,
) -> Result<Json<ApiResponse<CreatedResponse>>, AppError> {
    let session_id = state.charging.log_charging_session(&user_id, &id, request).await?;
    Ok(Json(ApiResponse::success(CreatedResponse { id: session_id })))
}

async fn get_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<ApiResponse<Vec<ChargingSession>>>, AppError> {
    let sessions = state.charging.get_charging_history(&id, query.limit).await?;
    Ok(Json(ApiResponse::success(sessions)))
}

async fn get_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ChargingStats>>, AppError> {
    let stats = state.charging.get_charging_stats(&id).await?;
    Ok(Json(ApiResponse::success(stats)))
}
