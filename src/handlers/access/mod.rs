//! Batch practical access handlers

mod handler;
pub mod request;

pub use handler::*;

use axum::{
    routing::{get, put},
    Router,
};

use crate::state::AppState;

/// Access gate routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/practical/{practical_id}", get(handler::get_for_practical))
        .route("/", put(handler::upsert_access))
}
