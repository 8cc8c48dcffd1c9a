//! Department handlers

mod handler;
pub mod request;

pub use handler::*;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// Department routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_department))
        .route("/", get(handler::list_departments))
        .route("/{id}", get(handler::get_department))
        .route("/{id}", put(handler::update_department))
        .route("/{id}", delete(handler::delete_department))
}
