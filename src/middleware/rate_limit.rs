//! Rate limiting middleware
//!
//! Fixed-window counters in Redis, keyed by user and endpoint bucket.
//! Redis failures let the request through: losing the limiter must not
//! take submissions down with it.

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use redis::AsyncCommands;

use crate::{
    constants::rate_limits, error::AppError, middleware::auth::AuthenticatedUser,
    state::AppState,
};

/// Rate limit middleware
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    // Auth middleware runs first; fall back to a shared bucket otherwise
    let subject = request
        .extensions()
        .get::<AuthenticatedUser>()
        .map(|u| u.id.to_string())
        .unwrap_or_else(|| "anonymous".to_string());

    let (limit, window) = get_rate_limit(&path);
    let key = format!("rate_limit:{}:{}", subject, path_bucket(&path));

    let mut redis = state.redis();

    let count: i64 = match redis.incr(&key, 1).await {
        Ok(count) => count,
        Err(e) => {
            tracing::warn!(error = %e, "Rate limit check failed, letting request through");
            return Ok(next.run(request).await);
        }
    };

    if count == 1 {
        // Set expiry on first request in the window
        let _: Result<(), _> = redis.expire(&key, window).await;
    }

    if count > limit {
        return Err(AppError::TooManyRequests);
    }

    Ok(next.run(request).await)
}

/// Get rate limit for a path
fn get_rate_limit(path: &str) -> (i64, i64) {
    if path.ends_with("/submissions/submit-code") {
        (
            rate_limits::SUBMIT_MAX_REQUESTS,
            rate_limits::SUBMIT_WINDOW_SECS,
        )
    } else if path.ends_with("/submissions/run") {
        (rate_limits::RUN_MAX_REQUESTS, rate_limits::RUN_WINDOW_SECS)
    } else {
        (
            rate_limits::GENERAL_MAX_REQUESTS,
            rate_limits::GENERAL_WINDOW_SECS,
        )
    }
}

/// Get bucket for path (for grouping similar endpoints)
fn path_bucket(path: &str) -> &str {
    if path.ends_with("/submissions/submit-code") {
        "submit"
    } else if path.ends_with("/submissions/run") {
        "run"
    } else if path.contains("/submissions") {
        "submissions"
    } else if path.contains("/practicals") {
        "practicals"
    } else {
        "general"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_window_is_tighter_than_general() {
        let (submit_limit, submit_window) = get_rate_limit("/api/v1/submissions/submit-code");
        let (general_limit, _) = get_rate_limit("/api/v1/departments");
        assert!(submit_limit < general_limit);
        assert_eq!(submit_window, rate_limits::SUBMIT_WINDOW_SECS);
    }

    #[test]
    fn test_path_buckets() {
        assert_eq!(path_bucket("/api/v1/submissions/submit-code"), "submit");
        assert_eq!(path_bucket("/api/v1/submissions/run"), "run");
        assert_eq!(path_bucket("/api/v1/submissions/3/status"), "submissions");
        assert_eq!(path_bucket("/api/v1/courses"), "general");
    }
}
