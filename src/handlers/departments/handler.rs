//! Department handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::Department,
    services::DepartmentService,
    state::AppState,
};

use super::request::DepartmentRequest;

pub async fn create_department(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<DepartmentRequest>,
) -> AppResult<(StatusCode, Json<Department>)> {
    auth_user.ensure_staff()?;
    payload.validate()?;

    let department = DepartmentService::create(state.db(), &payload.name).await?;
    Ok((StatusCode::CREATED, Json(department)))
}

pub async fn list_departments(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<Department>>> {
    let departments = DepartmentService::list(state.db()).await?;
    Ok(Json(departments))
}

pub async fn get_department(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Department>> {
    let department = DepartmentService::get(state.db(), id).await?;
    Ok(Json(department))
}

pub async fn update_department(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<DepartmentRequest>,
) -> AppResult<Json<Department>> {
    auth_user.ensure_staff()?;
    payload.validate()?;

    let department = DepartmentService::update(state.db(), id, &payload.name).await?;
    Ok(Json(department))
}

pub async fn delete_department(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    auth_user.ensure_staff()?;

    DepartmentService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
