//! Practical handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// Practical routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_practical))
        .route("/", get(handler::list_practicals))
        .route("/{id}", get(handler::get_practical))
        .route("/{id}", put(handler::update_practical))
        .route("/{id}", delete(handler::delete_practical))
        .route("/{id}/languages", get(handler::get_practical_languages))
        .route("/course/{course_id}", get(handler::list_by_course))
}
