//! Student handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::{Student, StudentProfile},
    services::StudentService,
    state::AppState,
};

use super::request::{CreateStudentRequest, UpdateStudentRequest};

pub async fn create_student(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateStudentRequest>,
) -> AppResult<(StatusCode, Json<Student>)> {
    auth_user.ensure_staff()?;
    payload.validate()?;

    let student = StudentService::create(
        state.db(),
        payload.student_id,
        &payload.roll_no,
        payload.batch_id,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn list_students(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<StudentProfile>>> {
    auth_user.ensure_staff()?;

    let students = StudentService::list(state.db()).await?;
    Ok(Json(students))
}

pub async fn get_student(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Student>> {
    // Students may look up their own record
    if !auth_user.is_staff() && auth_user.id != id {
        return Err(crate::error::AppError::Forbidden(
            "Cannot view other students".to_string(),
        ));
    }

    let student = StudentService::get(state.db(), id).await?;
    Ok(Json(student))
}

pub async fn list_by_batch(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(batch_id): Path<i32>,
) -> AppResult<Json<Vec<StudentProfile>>> {
    auth_user.ensure_staff()?;

    let students = StudentService::list_by_batch(state.db(), batch_id).await?;
    Ok(Json(students))
}

pub async fn update_student(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStudentRequest>,
) -> AppResult<Json<Student>> {
    auth_user.ensure_staff()?;
    payload.validate()?;

    let student =
        StudentService::update(state.db(), id, &payload.roll_no, payload.batch_id).await?;
    Ok(Json(student))
}

pub async fn delete_student(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    auth_user.ensure_staff()?;

    StudentService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
