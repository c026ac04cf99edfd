use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use appointment_cell::router::appointment_routes;
use settings_cell::router::settings_routes;
use shared_database::ClinicStorage;
use user_cell::router::user_routes;

pub fn create_router(storage: Arc<ClinicStorage>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic Core API is running!" }))
        .route("/api/health", get(health_check))
        .nest("/api/users", user_routes(storage.clone()))
        .nest("/api/appointments", appointment_routes(storage.clone()))
        .nest("/api/settings", settings_routes(storage))
}

/// Liveness only: never touches the store.
async fn health_check() -> Json<Value> {
    Json(json!({ "ok": true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_check_reports_ok() {
        let Json(body) = health_check().await;
        assert_eq!(body, json!({ "ok": true }));
    }
}
