//! Submission service
//!
//! Owns the submission lifecycle on the request side: input checks and the
//! access gate run synchronously before anything touches the judge, the
//! pending row is inserted, and evaluation is handed to a background task.
//! The status façade translates persisted state for fixed-interval client
//! polling.

use std::collections::HashMap;
use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    constants::MAX_OUTPUT_PREVIEW_LENGTH,
    db::repositories::{
        AccessRepository, LanguageRepository, PracticalRepository, StudentRepository,
        SubmissionRepository,
    },
    db::repositories::submission_repo::SubmissionListRow,
    error::{AppError, AppResult},
    handlers::submissions::{
        request::{RunCodeRequest, SubmitCodeRequest, UpdateSubmissionRequest},
        response::{CaseResultView, SubmissionDetailResponse, SubmissionStatusResponse},
    },
    judge::evaluator::AdhocRun,
    judge::EvaluationRunner,
    middleware::auth::AuthenticatedUser,
    models::{check_access, AccessBlock, Submission, SubmissionStatus, TestCase},
    utils::time::now_utc,
    utils::validation::{validate_source_code, validate_stdin},
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Accept a graded submission and spawn its evaluation.
    ///
    /// Everything that can fail synchronously (input, gate, duplicate
    /// check) fails here, before any judge interaction.
    pub async fn submit_code(
        pool: &PgPool,
        runner: Arc<EvaluationRunner>,
        student_id: i32,
        payload: SubmitCodeRequest,
    ) -> AppResult<Submission> {
        validate_source_code(&payload.code)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        let student = StudentRepository::find_by_id(pool, student_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student record not found".to_string()))?;

        let practical = PracticalRepository::find_by_id(pool, payload.practical_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Practical not found".to_string()))?;

        LanguageRepository::find_by_id(pool, payload.language_id)
            .await?
            .ok_or(AppError::InvalidLanguage(payload.language_id))?;

        if !PracticalRepository::language_allowed(pool, practical.practical_id, payload.language_id)
            .await?
        {
            return Err(AppError::InvalidInput(format!(
                "Language {} is not allowed for this practical",
                payload.language_id
            )));
        }

        // Access gate: evaluated once, never re-checked mid-evaluation
        let access =
            AccessRepository::find(pool, practical.practical_id, student.batch_id).await?;
        check_access(access.as_ref(), now_utc()).map_err(|block| match block {
            AccessBlock::Locked => AppError::PracticalLocked,
            AccessBlock::DeadlinePassed => AppError::DeadlinePassed,
        })?;

        // Idempotent short-circuit: an accepted submission stands
        if SubmissionRepository::find_accepted(pool, practical.practical_id, student.student_id)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadySubmitted);
        }

        let submission = SubmissionRepository::create(
            pool,
            practical.practical_id,
            student.student_id,
            &payload.code,
            payload.language_id,
            SubmissionStatus::Pending.as_str(),
        )
        .await?;

        tracing::info!(
            submission_id = submission.submission_id,
            practical_id = practical.practical_id,
            student_id = student.student_id,
            "Submission received"
        );

        runner.spawn_evaluation(submission.submission_id);

        Ok(submission)
    }

    /// Status façade for client polling.
    ///
    /// `completed` is true only at a terminal status; per-case rows are
    /// included as far as evaluation has progressed. Hidden fixtures never
    /// leak output text to students.
    pub async fn get_status(
        pool: &PgPool,
        submission_id: i32,
        viewer: &AuthenticatedUser,
    ) -> AppResult<SubmissionStatusResponse> {
        let submission = SubmissionRepository::find_by_id(pool, submission_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        if !viewer.is_staff() && submission.student_id != viewer.id {
            return Err(AppError::Forbidden(
                "Cannot view other students' submissions".to_string(),
            ));
        }

        let status =
            SubmissionStatus::from_str(&submission.status).unwrap_or(SubmissionStatus::Pending);

        let case_rows = SubmissionRepository::case_results(pool, submission_id).await?;

        let visibility: HashMap<i32, bool> =
            PracticalRepository::test_cases(pool, submission.practical_id)
                .await?
                .into_iter()
                .map(|tc| (tc.test_case_id, tc.is_public))
                .collect();

        let show_all = viewer.is_staff();
        let results = case_rows
            .into_iter()
            .map(|row| {
                let public = visibility.get(&row.test_case_id).copied().unwrap_or(false);
                let show_text = show_all || public;

                CaseResultView {
                    test_case_id: row.test_case_id,
                    verdict: row.verdict,
                    actual_output: if show_text {
                        row.actual_output
                            .map(|o| TestCase::preview(&o, MAX_OUTPUT_PREVIEW_LENGTH))
                    } else {
                        None
                    },
                    time_ms: row.time_ms,
                    memory_kb: row.memory_kb,
                    error_message: if show_text { row.error_message } else { None },
                }
            })
            .collect();

        Ok(SubmissionStatusResponse {
            submission_id,
            status: status.as_str().to_string(),
            reject_reason: submission.reject_reason,
            marks: submission.marks,
            completed: status.is_final(),
            results,
        })
    }

    /// Full submission detail for staff review
    pub async fn get_submission(
        pool: &PgPool,
        submission_id: i32,
    ) -> AppResult<SubmissionDetailResponse> {
        let detail = sqlx::query_as::<_, SubmissionDetailResponse>(
            r#"
            SELECT
                s.submission_id,
                s.practical_id,
                p.sr_no AS practical_sr_no,
                p.name AS practical_name,
                c.name AS course_name,
                pl.name AS language_name,
                s.student_id,
                s.code,
                s.status,
                s.reject_reason,
                s.marks,
                s.submitted_at,
                s.judged_at
            FROM submissions s
            JOIN practicals p ON s.practical_id = p.practical_id
            JOIN courses c ON p.course_id = c.course_id
            JOIN programming_languages pl ON s.language_id = pl.language_id
            WHERE s.submission_id = $1
            "#,
        )
        .bind(submission_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        Ok(detail)
    }

    /// Submissions for a practical scoped to one batch (faculty view)
    pub async fn list_by_practical(
        pool: &PgPool,
        practical_id: i32,
        batch_id: i32,
    ) -> AppResult<Vec<SubmissionListRow>> {
        SubmissionRepository::list_by_practical_and_batch(pool, practical_id, batch_id).await
    }

    /// Faculty override of a submission's status and marks
    pub async fn update_submission(
        pool: &PgPool,
        submission_id: i32,
        payload: UpdateSubmissionRequest,
    ) -> AppResult<Submission> {
        let status = SubmissionStatus::from_str(&payload.status)
            .filter(|s| s.is_final())
            .ok_or_else(|| {
                AppError::InvalidInput("Status must be 'accepted' or 'rejected'".to_string())
            })?;

        if payload.marks < 0 {
            return Err(AppError::InvalidInput("Marks must be non-negative".to_string()));
        }

        let submission = SubmissionRepository::find_by_id(pool, submission_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        let practical = PracticalRepository::find_by_id(pool, submission.practical_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Practical not found".to_string()))?;

        if payload.marks > practical.max_marks {
            return Err(AppError::InvalidInput(format!(
                "Marks cannot exceed {}",
                practical.max_marks
            )));
        }

        SubmissionRepository::update_override(pool, submission_id, status.as_str(), payload.marks)
            .await
    }

    /// Ungraded ad hoc run against caller-provided stdin
    pub async fn run_code(
        pool: &PgPool,
        runner: Arc<EvaluationRunner>,
        payload: RunCodeRequest,
    ) -> AppResult<AdhocRun> {
        validate_source_code(&payload.code)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        if let Some(stdin) = payload.stdin.as_deref() {
            validate_stdin(stdin).map_err(|e| AppError::InvalidInput(e.to_string()))?;
        }

        let language = LanguageRepository::find_by_id(pool, payload.language_id)
            .await?
            .ok_or(AppError::InvalidLanguage(payload.language_id))?;

        runner
            .run_adhoc(
                &payload.code,
                language.judge_language_id,
                payload.stdin.as_deref().unwrap_or(""),
            )
            .await
    }
}
