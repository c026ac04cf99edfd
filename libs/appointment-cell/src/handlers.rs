use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use shared_database::ClinicStorage;
use shared_models::error::AppError;

use crate::models::{Appointment, CreateAppointmentRequest, UpdateAppointmentRequest};
use crate::services::AppointmentService;

#[axum::debug_handler]
pub async fn list_appointments(
    State(storage): State<Arc<ClinicStorage>>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let service = AppointmentService::new(storage);

    let appointments = service
        .list_appointments()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(appointments))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(storage): State<Arc<ClinicStorage>>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    if request.missing_required_fields() {
        return Err(AppError::BadRequest("Missing fields".to_string()));
    }

    let service = AppointmentService::new(storage);

    let appointment = service
        .book_appointment(request)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(storage): State<Arc<ClinicStorage>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    let service = AppointmentService::new(storage);

    let appointment = service
        .update_appointment(id, request)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

    Ok(Json(appointment))
}
