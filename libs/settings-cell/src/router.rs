use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_database::ClinicStorage;

use crate::handlers::*;

pub fn settings_routes(storage: Arc<ClinicStorage>) -> Router {
    Router::new()
        .route("/", get(list_settings))
        .route("/", post(create_setting))
        .with_state(storage)
}
