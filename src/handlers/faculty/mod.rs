//! Faculty handlers

mod handler;
pub mod request;

pub use handler::*;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// Faculty routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_faculty))
        .route("/", get(handler::list_faculty))
        .route("/{id}", get(handler::get_faculty))
        .route("/{id}", put(handler::update_faculty))
        .route("/{id}", delete(handler::delete_faculty))
}
