//! Course handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::{Course, CourseWithFaculty},
    services::CourseService,
    state::AppState,
};

use super::request::{AssignFacultyRequest, CreateCourseRequest, UpdateCourseRequest};

pub async fn create_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateCourseRequest>,
) -> AppResult<(StatusCode, Json<Course>)> {
    auth_user.ensure_staff()?;
    payload.validate()?;

    let course = CourseService::create(
        state.db(),
        payload.department_id,
        &payload.name,
        &payload.code,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(course)))
}

pub async fn list_courses(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<Course>>> {
    let courses = CourseService::list(state.db()).await?;
    Ok(Json(courses))
}

pub async fn get_course(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<CourseWithFaculty>> {
    let course = CourseService::get(state.db(), id).await?;
    Ok(Json(course))
}

pub async fn update_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCourseRequest>,
) -> AppResult<Json<Course>> {
    auth_user.ensure_staff()?;
    payload.validate()?;

    let course = CourseService::update(state.db(), id, &payload.name, &payload.code).await?;
    Ok(Json(course))
}

pub async fn delete_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    auth_user.ensure_staff()?;

    CourseService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn assign_faculty(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<AssignFacultyRequest>,
) -> AppResult<StatusCode> {
    auth_user.ensure_staff()?;

    CourseService::assign_faculty(state.db(), id, &payload.faculty_ids).await?;
    Ok(StatusCode::NO_CONTENT)
}
