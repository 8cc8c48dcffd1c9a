//! Faculty handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::{Faculty, FacultyProfile},
    services::FacultyService,
    state::AppState,
};

use super::request::{CreateFacultyRequest, UpdateFacultyRequest};

pub async fn create_faculty(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateFacultyRequest>,
) -> AppResult<(StatusCode, Json<Faculty>)> {
    auth_user.ensure_staff()?;

    let faculty =
        FacultyService::create(state.db(), payload.faculty_id, payload.department_id).await?;

    Ok((StatusCode::CREATED, Json(faculty)))
}

pub async fn list_faculty(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<FacultyProfile>>> {
    auth_user.ensure_staff()?;

    let faculty = FacultyService::list(state.db()).await?;
    Ok(Json(faculty))
}

pub async fn get_faculty(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Faculty>> {
    auth_user.ensure_staff()?;

    let faculty = FacultyService::get(state.db(), id).await?;
    Ok(Json(faculty))
}

pub async fn update_faculty(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFacultyRequest>,
) -> AppResult<Json<Faculty>> {
    auth_user.ensure_staff()?;

    let faculty = FacultyService::update(state.db(), id, payload.department_id).await?;
    Ok(Json(faculty))
}

pub async fn delete_faculty(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    auth_user.ensure_staff()?;

    FacultyService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
