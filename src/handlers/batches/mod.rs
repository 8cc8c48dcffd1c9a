//! Batch handlers

mod handler;
pub mod request;

pub use handler::*;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// Batch routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_batch))
        .route("/", get(handler::list_batches))
        .route("/{id}", get(handler::get_batch))
        .route("/{id}", put(handler::update_batch))
        .route("/{id}", delete(handler::delete_batch))
        .route("/department/{department_id}", get(handler::list_by_department))
}
