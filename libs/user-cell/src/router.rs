use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use shared_database::ClinicStorage;

use crate::handlers::*;

pub fn user_routes(storage: Arc<ClinicStorage>) -> Router {
    Router::new()
        .route("/", get(list_users))
        .route("/", post(create_user))
        .route("/{id}", delete(delete_user))
        .with_state(storage)
}
