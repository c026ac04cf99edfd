// Thin cell: no services layer, the two handlers query the store directly.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;

use shared_database::ClinicStorage;
use shared_models::error::AppError;

use crate::models::{CreateSettingRequest, Setting};

#[axum::debug_handler]
pub async fn list_settings(
    State(storage): State<Arc<ClinicStorage>>,
) -> Result<Json<Vec<Setting>>, AppError> {
    let rows = sqlx::query("SELECT id, key, value FROM settings ORDER BY id")
        .fetch_all(storage.pool())
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let settings = rows
        .into_iter()
        .map(row_to_setting)
        .collect::<Result<Vec<_>, sqlx::Error>>()
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(settings))
}

#[axum::debug_handler]
pub async fn create_setting(
    State(storage): State<Arc<ClinicStorage>>,
    Json(request): Json<CreateSettingRequest>,
) -> Result<(StatusCode, Json<Setting>), AppError> {
    if request.missing_key() {
        return Err(AppError::BadRequest("Missing key".to_string()));
    }

    debug!("Storing setting: {:?}", request.key);

    // Append unconditionally; duplicate keys are allowed.
    let result = sqlx::query("INSERT INTO settings (key, value) VALUES (?, ?)")
        .bind(request.key.unwrap_or_default())
        .bind(request.value.unwrap_or_default())
        .execute(storage.pool())
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let row = sqlx::query("SELECT id, key, value FROM settings WHERE id = ?")
        .bind(result.last_insert_rowid())
        .fetch_one(storage.pool())
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    let setting = row_to_setting(row).map_err(|e| AppError::Database(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(setting)))
}

fn row_to_setting(row: SqliteRow) -> Result<Setting, sqlx::Error> {
    Ok(Setting {
        id: row.try_get("id")?,
        key: row.try_get("key")?,
        value: row.try_get("value")?,
    })
}
