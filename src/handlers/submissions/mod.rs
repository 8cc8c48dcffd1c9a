//! Submission handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

/// Submission routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/submit-code", post(handler::submit_code))
        .route("/run", post(handler::run_code))
        .route("/{id}/status", get(handler::get_submission_status))
        .route("/{id}", get(handler::get_submission))
        .route("/{id}", put(handler::update_submission))
        .route("/practical/{practical_id}", get(handler::list_by_practical))
}
