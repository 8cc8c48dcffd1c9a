//! Student handlers

mod handler;
pub mod request;

pub use handler::*;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// Student routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_student))
        .route("/", get(handler::list_students))
        .route("/{id}", get(handler::get_student))
        .route("/{id}", put(handler::update_student))
        .route("/{id}", delete(handler::delete_student))
        .route("/batch/{batch_id}", get(handler::list_by_batch))
}
