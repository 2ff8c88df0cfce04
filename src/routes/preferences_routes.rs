use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::dto::ApiResponse;
use crate::models::UserPreferences;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_preferences_router() -> Router<AppState> {
    Router::new().route(
        "/api/users/:user_id/preferences",
        get(get_preferences).put(save_preferences),
    )
}

async fn get_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<UserPreferences>>, AppError> {
    let preferences = state.preferences.get_preferences(&user_id).await?;
    Ok(Json(ApiResponse::success(preferences)))
}

async fn save_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(preferences): Json<UserPreferences>,
) -> Result<Json<ApiResponse<UserPreferences>>, AppError> {
    state.preferences.save_preferences(&user_id, &preferences).await?;
    Ok(Json(ApiResponse::success_with_message(
        preferences,
        "Preferencias guardadas".to_string(),
    )))
}
