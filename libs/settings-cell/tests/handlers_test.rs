use std::sync::Arc;

use assert_matches::assert_matches;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use tempfile::TempDir;

use settings_cell::handlers::{create_setting, list_settings};
use settings_cell::models::CreateSettingRequest;
use shared_database::ClinicStorage;
use shared_models::error::AppError;

async fn setup_storage(dir: &TempDir) -> Arc<ClinicStorage> {
    let path = dir.path().join("clinic.db");
    let storage = ClinicStorage::connect(path.to_str().unwrap())
        .await
        .expect("open test store");
    storage.init_schema().await.expect("init schema");
    Arc::new(storage)
}

fn request_from(value: serde_json::Value) -> CreateSettingRequest {
    serde_json::from_value(value).expect("valid request json")
}

#[tokio::test]
async fn listing_empty_table_returns_empty_array() {
    let dir = TempDir::new().unwrap();
    let storage = setup_storage(&dir).await;

    let Json(settings) = list_settings(State(storage)).await.expect("list settings");
    assert!(settings.is_empty());
}

#[tokio::test]
async fn create_requires_a_key() {
    let dir = TempDir::new().unwrap();
    let storage = setup_storage(&dir).await;

    let err = create_setting(
        State(storage.clone()),
        Json(request_from(json!({ "value": "dark" }))),
    )
    .await
    .expect_err("key is required");
    assert_matches!(err, AppError::BadRequest(msg) => assert_eq!(msg, "Missing key"));

    let err = create_setting(
        State(storage),
        Json(request_from(json!({ "key": "", "value": "dark" }))),
    )
    .await
    .expect_err("blank key is missing");
    assert_matches!(err, AppError::BadRequest(msg) => assert_eq!(msg, "Missing key"));
}

#[tokio::test]
async fn create_defaults_value_to_blank() {
    let dir = TempDir::new().unwrap();
    let storage = setup_storage(&dir).await;

    let (status, Json(setting)) = create_setting(
        State(storage),
        Json(request_from(json!({ "key": "theme" }))),
    )
    .await
    .expect("create setting");

    assert_eq!(status, StatusCode::CREATED);
    assert!(setting.id > 0);
    assert_eq!(setting.key, "theme");
    assert_eq!(setting.value, "");
}

#[tokio::test]
async fn duplicate_keys_append_new_rows() {
    let dir = TempDir::new().unwrap();
    let storage = setup_storage(&dir).await;

    let body = json!({ "key": "theme", "value": "dark" });
    create_setting(State(storage.clone()), Json(request_from(body.clone())))
        .await
        .expect("first create");
    create_setting(State(storage.clone()), Json(request_from(body)))
        .await
        .expect("second create with the same key");

    let Json(settings) = list_settings(State(storage)).await.expect("list settings");
    assert_eq!(settings.len(), 2);
    assert!(settings[0].id < settings[1].id);
    assert_eq!(settings[0].key, settings[1].key);
}
