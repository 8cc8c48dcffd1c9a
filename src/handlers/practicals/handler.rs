//! Practical handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::{Practical, ProgrammingLanguage},
    services::PracticalService,
    state::AppState,
};

use super::{
    request::{CreatePracticalRequest, UpdatePracticalRequest},
    response::PracticalResponse,
};

/// Create a practical with fixtures and allowed languages (staff only)
pub async fn create_practical(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreatePracticalRequest>,
) -> AppResult<(StatusCode, Json<Practical>)> {
    auth_user.ensure_staff()?;
    payload.validate()?;

    let practical = PracticalService::create(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(practical)))
}

/// List all practicals
pub async fn list_practicals(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<Practical>>> {
    let practicals = PracticalService::list(state.db()).await?;
    Ok(Json(practicals))
}

/// Get a practical with its fixtures; hidden fixtures for staff only
pub async fn get_practical(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<PracticalResponse>> {
    let practical = PracticalService::get(state.db(), id, auth_user.is_staff()).await?;
    Ok(Json(practical))
}

/// Update a practical (staff only)
pub async fn update_practical(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePracticalRequest>,
) -> AppResult<Json<Practical>> {
    auth_user.ensure_staff()?;
    payload.validate()?;

    let practical = PracticalService::update(state.db(), id, payload).await?;
    Ok(Json(practical))
}

/// Delete a practical (staff only)
pub async fn delete_practical(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    auth_user.ensure_staff()?;

    PracticalService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Languages a practical may be solved in
pub async fn get_practical_languages(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<ProgrammingLanguage>>> {
    let languages = PracticalService::languages(state.db(), id).await?;
    Ok(Json(languages))
}

/// Practicals for a course
pub async fn list_by_course(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(course_id): Path<i32>,
) -> AppResult<Json<Vec<Practical>>> {
    let practicals = PracticalService::list_by_course(state.db(), course_id).await?;
    Ok(Json(practicals))
}
