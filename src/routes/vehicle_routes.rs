use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, put},
    Json, Router,
};
use std::sync::Arc;

use crate::dto::vehicle_dto::{AddVehicleRequest, ListVehiclesQuery, RenameVehicleRequest, UpdateBatteryRequest};
use crate::dto::{ApiResponse, CreatedResponse};
use crate::models::{SmartReminder, UserVehicle};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/users/:user_id/vehicles",
            get(list_vehicles).post(add_vehicle),
        )
        .route("/api/users/:user_id/vehicles/:id", delete(remove_vehicle))
        .route("/api/users/:user_id/vehicles/:id/battery", put(update_battery))
        .route("/api/users/:user_id/vehicles/:id/nickname", put(rename_vehicle))
        .route("/api/users/:user_id/vehicles/:id/reminders", get(get_reminders))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<ListVehiclesQuery>,
) -> Result<Json<ApiResponse<Arc<Vec<UserVehicle>>>>, AppError> {
    let vehicles = state.vehicles.list_vehicles(&user_id, query.force_refresh).await?;
    Ok(Json(ApiResponse::success(vehicles)))
}

async fn add_vehicle(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<AddVehicleRequest>,
) -> Result<Json<ApiResponse<CreatedResponse>>, AppError> {
    let id = state.vehicles.add_vehicle(&user_id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        CreatedResponse { id },
        "Vehículo añadido".to_string(),
    )))
}

async fn update_battery(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(String, String)>,
    Json(request): Json<UpdateBatteryRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state
        .vehicles
        .update_battery(&id, request.battery_level, Some(&user_id))
        .await?;
    Ok(Json(ApiResponse::success(())))
}

async fn rename_vehicle(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(String, String)>,
    Json(request): Json<RenameVehicleRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state
        .vehicles
        .rename_vehicle(&id, &request.nickname, Some(&user_id))
        .await?;
    Ok(Json(ApiResponse::success(())))
}

async fn remove_vehicle(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.vehicles.remove_vehicle(&id, Some(&user_id)).await?;
    Ok(Json(ApiResponse::success_with_message((), "Vehículo eliminado".to_string())))
}

async fn get_reminders(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Vec<SmartReminder>>>, AppError> {
    let reminders = state.reminders.reminders_for_vehicle(&user_id, &id).await?;
    Ok(Json(ApiResponse::success(reminders)))
}
