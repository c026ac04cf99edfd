use std::sync::Arc;

use assert_matches::assert_matches;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use tempfile::TempDir;

use shared_database::ClinicStorage;
use shared_models::error::AppError;
use user_cell::handlers::{create_user, delete_user, list_users};
use user_cell::models::CreateUserRequest;

async fn setup_storage(dir: &TempDir) -> Arc<ClinicStorage> {
    let path = dir.path().join("clinic.db");
    let storage = ClinicStorage::connect(path.to_str().unwrap())
        .await
        .expect("open test store");
    storage.init_schema().await.expect("init schema");
    Arc::new(storage)
}

fn request_from(value: serde_json::Value) -> CreateUserRequest {
    serde_json::from_value(value).expect("valid request json")
}

#[tokio::test]
async fn listing_empty_table_returns_empty_array() {
    let dir = TempDir::new().unwrap();
    let storage = setup_storage(&dir).await;

    let Json(users) = list_users(State(storage)).await.expect("list users");
    assert!(users.is_empty());
}

#[tokio::test]
async fn create_rejects_missing_required_fields() {
    let dir = TempDir::new().unwrap();
    let storage = setup_storage(&dir).await;

    let err = create_user(
        State(storage.clone()),
        Json(request_from(json!({ "name": "Grace", "email": "grace@clinic.com" }))),
    )
    .await
    .expect_err("role is required");
    assert_matches!(err, AppError::BadRequest(msg) => assert_eq!(msg, "Missing fields"));

    // empty string counts as missing, same as absent
    let err = create_user(
        State(storage.clone()),
        Json(request_from(json!({ "name": "Grace", "email": "", "role": "Doctor" }))),
    )
    .await
    .expect_err("blank email is missing");
    assert_matches!(err, AppError::BadRequest(msg) => assert_eq!(msg, "Missing fields"));

    // nothing was written
    let Json(users) = list_users(State(storage)).await.expect("list users");
    assert!(users.is_empty());
}

#[tokio::test]
async fn create_defaults_specialization_to_blank() {
    let dir = TempDir::new().unwrap();
    let storage = setup_storage(&dir).await;

    let (status, Json(user)) = create_user(
        State(storage),
        Json(request_from(json!({
            "name": "Grace",
            "email": "grace@clinic.com",
            "role": "Doctor"
        }))),
    )
    .await
    .expect("create user");

    assert_eq!(status, StatusCode::CREATED);
    assert!(user.id > 0);
    assert_eq!(user.name, "Grace");
    assert_eq!(user.specialization, "");
}

#[tokio::test]
async fn duplicate_email_surfaces_store_error() {
    let dir = TempDir::new().unwrap();
    let storage = setup_storage(&dir).await;

    let body = json!({
        "name": "Grace",
        "email": "grace@clinic.com",
        "role": "Doctor",
        "specialization": "Neurology"
    });
    create_user(State(storage.clone()), Json(request_from(body.clone())))
        .await
        .expect("first create");

    let err = create_user(State(storage), Json(request_from(body)))
        .await
        .expect_err("second create must hit the unique email constraint");
    assert_matches!(err, AppError::Database(msg) => {
        assert!(msg.contains("UNIQUE"), "unexpected error: {msg}");
    });
}

#[tokio::test]
async fn deleting_missing_user_reports_success() {
    let dir = TempDir::new().unwrap();
    let storage = setup_storage(&dir).await;

    let Json(body) = delete_user(State(storage), Path(42))
        .await
        .expect("delete is unconditional");
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn delete_removes_the_row() {
    let dir = TempDir::new().unwrap();
    let storage = setup_storage(&dir).await;

    let (_, Json(user)) = create_user(
        State(storage.clone()),
        Json(request_from(json!({
            "name": "Grace",
            "email": "grace@clinic.com",
            "role": "Doctor"
        }))),
    )
    .await
    .expect("create user");

    delete_user(State(storage.clone()), Path(user.id))
        .await
        .expect("delete user");

    let Json(users) = list_users(State(storage)).await.expect("list users");
    assert!(users.is_empty());
}
