//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.
//! Everything except the health check sits behind the auth middleware;
//! rate limiting runs after authentication so windows are per user.

pub mod access;
pub mod batches;
pub mod courses;
pub mod departments;
pub mod faculty;
pub mod health;
pub mod languages;
pub mod practicals;
pub mod students;
pub mod submissions;

use axum::{middleware, Router};

use crate::{
    middleware::{auth_middleware, rate_limit_middleware},
    state::AppState,
};

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .nest("/departments", departments::routes())
        .nest("/batches", batches::routes())
        .nest("/courses", courses::routes())
        .nest("/faculty", faculty::routes())
        .nest("/students", students::routes())
        .nest("/languages", languages::routes())
        .nest("/practicals", practicals::routes())
        .nest("/submissions", submissions::routes())
        .nest("/access", access::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new().merge(health::routes()).merge(protected)
}
