use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use shared_database::ClinicStorage;

use crate::handlers::*;

pub fn appointment_routes(storage: Arc<ClinicStorage>) -> Router {
    Router::new()
        .route("/", get(list_appointments))
        .route("/", post(book_appointment))
        .route("/{id}", put(update_appointment))
        .with_state(storage)
}
