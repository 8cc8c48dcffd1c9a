//! Batch handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::Batch,
    services::BatchService,
    state::AppState,
};

use super::request::{CreateBatchRequest, UpdateBatchRequest};

pub async fn create_batch(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateBatchRequest>,
) -> AppResult<(StatusCode, Json<Batch>)> {
    auth_user.ensure_staff()?;
    payload.validate()?;

    let batch = BatchService::create(
        state.db(),
        payload.department_id,
        &payload.name,
        payload.semester,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(batch)))
}

pub async fn list_batches(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<Batch>>> {
    let batches = BatchService::list(state.db()).await?;
    Ok(Json(batches))
}

pub async fn get_batch(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Batch>> {
    let batch = BatchService::get(state.db(), id).await?;
    Ok(Json(batch))
}

pub async fn list_by_department(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(department_id): Path<i32>,
) -> AppResult<Json<Vec<Batch>>> {
    let batches = BatchService::list_by_department(state.db(), department_id).await?;
    Ok(Json(batches))
}

pub async fn update_batch(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBatchRequest>,
) -> AppResult<Json<Batch>> {
    auth_user.ensure_staff()?;
    payload.validate()?;

    let batch = BatchService::update(state.db(), id, &payload.name, payload.semester).await?;
    Ok(Json(batch))
}

pub async fn delete_batch(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    auth_user.ensure_staff()?;

    BatchService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
