use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_database::ClinicStorage;
use shared_models::error::AppError;

use crate::models::{CreateUserRequest, User};
use crate::services::UserService;

#[axum::debug_handler]
pub async fn list_users(
    State(storage): State<Arc<ClinicStorage>>,
) -> Result<Json<Vec<User>>, AppError> {
    let service = UserService::new(storage);

    let users = service
        .list_users()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(users))
}

#[axum::debug_handler]
pub async fn create_user(
    State(storage): State<Arc<ClinicStorage>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    if request.missing_required_fields() {
        return Err(AppError::BadRequest("Missing fields".to_string()));
    }

    let service = UserService::new(storage);

    let user = service
        .create_user(request)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(storage): State<Arc<ClinicStorage>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let service = UserService::new(storage);

    // No existence check: deleting an absent id still acknowledges success.
    service
        .delete_user(id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!({ "success": true })))
}
