//! Access handler implementations

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::BatchPracticalAccess,
    services::AccessService,
    state::AppState,
};

use super::request::UpsertAccessRequest;

/// Access rows configured for a practical (staff only)
pub async fn get_for_practical(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(practical_id): Path<i32>,
) -> AppResult<Json<Vec<BatchPracticalAccess>>> {
    auth_user.ensure_staff()?;

    let access = AccessService::get_for_practical(state.db(), practical_id).await?;
    Ok(Json(access))
}

/// Create or update a (practical, batch) access row (staff only)
pub async fn upsert_access(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpsertAccessRequest>,
) -> AppResult<Json<BatchPracticalAccess>> {
    auth_user.ensure_staff()?;

    let access = AccessService::upsert(
        state.db(),
        payload.practical_id,
        payload.batch_id,
        payload.locked,
        payload.deadline,
    )
    .await?;

    Ok(Json(access))
}
