//! Submission handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    constants::roles,
    db::repositories::submission_repo::SubmissionListRow,
    error::{AppError, AppResult},
    judge::evaluator::AdhocRun,
    middleware::auth::AuthenticatedUser,
    services::SubmissionService,
    state::AppState,
};

use super::{
    request::{ListSubmissionsQuery, RunCodeRequest, SubmitCodeRequest, UpdateSubmissionRequest},
    response::{SubmissionDetailResponse, SubmissionStatusResponse, SubmitCodeResponse},
};

/// Accept a graded submission and queue its evaluation
pub async fn submit_code(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<SubmitCodeRequest>,
) -> AppResult<(StatusCode, Json<SubmitCodeResponse>)> {
    payload.validate()?;

    if auth_user.role != roles::STUDENT {
        return Err(AppError::Forbidden(
            "Only students can submit practicals".to_string(),
        ));
    }

    let submission =
        SubmissionService::submit_code(state.db(), state.runner(), auth_user.id, payload).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(SubmitCodeResponse {
            submission_id: submission.submission_id,
            status: submission.status,
            message: "Submission received and queued for evaluation".to_string(),
        }),
    ))
}

/// Ungraded ad hoc run against custom stdin
pub async fn run_code(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Json(payload): Json<RunCodeRequest>,
) -> AppResult<Json<AdhocRun>> {
    payload.validate()?;

    let run = SubmissionService::run_code(state.db(), state.runner(), payload).await?;

    Ok(Json(run))
}

/// Polling endpoint for submission status
pub async fn get_submission_status(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<SubmissionStatusResponse>> {
    let status = SubmissionService::get_status(state.db(), id, &auth_user).await?;

    Ok(Json(status))
}

/// Full submission detail (staff only)
pub async fn get_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<SubmissionDetailResponse>> {
    auth_user.ensure_staff()?;

    let submission = SubmissionService::get_submission(state.db(), id).await?;

    Ok(Json(submission))
}

/// Submissions for a practical, scoped to a batch (staff only)
pub async fn list_by_practical(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(practical_id): Path<i32>,
    Query(query): Query<ListSubmissionsQuery>,
) -> AppResult<Json<Vec<SubmissionListRow>>> {
    auth_user.ensure_staff()?;

    let submissions =
        SubmissionService::list_by_practical(state.db(), practical_id, query.batch_id).await?;

    Ok(Json(submissions))
}

/// Faculty override of a submission's status and marks
pub async fn update_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSubmissionRequest>,
) -> AppResult<Json<crate::models::Submission>> {
    auth_user.ensure_staff()?;

    let submission = SubmissionService::update_submission(state.db(), id, payload).await?;

    Ok(Json(submission))
}
