//! Course handlers

mod handler;
pub mod request;

pub use handler::*;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// Course routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_course))
        .route("/", get(handler::list_courses))
        .route("/{id}", get(handler::get_course))
        .route("/{id}", put(handler::update_course))
        .route("/{id}", delete(handler::delete_course))
        .route("/{id}/faculty", put(handler::assign_faculty))
}
