//! Submission repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Submission, SubmissionCaseResult},
};

/// Submission row joined with student info for faculty listings
#[derive(Debug, sqlx::FromRow, serde::Serialize)]
pub struct SubmissionListRow {
    pub submission_id: i32,
    pub roll_no: String,
    pub student_name: String,
    pub status: String,
    pub reject_reason: Option<String>,
    pub marks: i32,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub batch_id: i32,
}

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Create a new submission
    pub async fn create(
        pool: &PgPool,
        practical_id: i32,
        student_id: i32,
        code: &str,
        language_id: i32,
        status: &str,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (practical_id, student_id, code, language_id, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(practical_id)
        .bind(student_id)
        .bind(code)
        .bind(language_id)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Find submission by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Submission>> {
        let submission =
            sqlx::query_as::<_, Submission>(r#"SELECT * FROM submissions WHERE submission_id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(submission)
    }

    /// Find an accepted submission for a student+practical pair, if any
    pub async fn find_accepted(
        pool: &PgPool,
        practical_id: i32,
        student_id: i32,
    ) -> AppResult<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE practical_id = $1 AND student_id = $2 AND status = 'accepted'
            ORDER BY submitted_at DESC
            LIMIT 1
            "#,
        )
        .bind(practical_id)
        .bind(student_id)
        .fetch_optional(pool)
        .await?;

        Ok(submission)
    }

    /// Update only the status (pending -> running)
    pub async fn update_status(pool: &PgPool, id: i32, status: &str) -> AppResult<()> {
        sqlx::query(r#"UPDATE submissions SET status = $2 WHERE submission_id = $1"#)
            .bind(id)
            .bind(status)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Write the final status, reject reason, and marks in one statement
    pub async fn update_result(
        pool: &PgPool,
        id: i32,
        status: &str,
        reject_reason: Option<&str>,
        marks: i32,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            UPDATE submissions
            SET
                status = $2,
                reject_reason = $3,
                marks = $4,
                judged_at = NOW()
            WHERE submission_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(reject_reason)
        .bind(marks)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Faculty override of status and marks
    pub async fn update_override(
        pool: &PgPool,
        id: i32,
        status: &str,
        marks: i32,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            UPDATE submissions
            SET status = $2, marks = $3
            WHERE submission_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(marks)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// List submissions for a practical, scoped to one batch
    pub async fn list_by_practical_and_batch(
        pool: &PgPool,
        practical_id: i32,
        batch_id: i32,
    ) -> AppResult<Vec<SubmissionListRow>> {
        let rows = sqlx::query_as::<_, SubmissionListRow>(
            r#"
            SELECT
                s.submission_id,
                st.roll_no,
                u.username AS student_name,
                s.status,
                s.reject_reason,
                s.marks,
                s.submitted_at,
                st.batch_id
            FROM submissions s
            JOIN students st ON s.student_id = st.student_id
            JOIN users u ON st.student_id = u.user_id
            WHERE s.practical_id = $1 AND st.batch_id = $2
            ORDER BY s.submitted_at DESC
            "#,
        )
        .bind(practical_id)
        .bind(batch_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Upsert one per-case result as it resolves
    pub async fn upsert_case_result(
        pool: &PgPool,
        submission_id: i32,
        test_case_id: i32,
        verdict: &str,
        actual_output: Option<&str>,
        time_ms: Option<f64>,
        memory_kb: Option<i64>,
        error_message: Option<&str>,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO submission_case_results (
                submission_id, test_case_id, verdict,
                actual_output, time_ms, memory_kb, error_message
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (submission_id, test_case_id) DO UPDATE SET
                verdict = EXCLUDED.verdict,
                actual_output = EXCLUDED.actual_output,
                time_ms = EXCLUDED.time_ms,
                memory_kb = EXCLUDED.memory_kb,
                error_message = EXCLUDED.error_message
            "#,
        )
        .bind(submission_id)
        .bind(test_case_id)
        .bind(verdict)
        .bind(actual_output)
        .bind(time_ms)
        .bind(memory_kb)
        .bind(error_message)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Per-case results recorded so far for a submission
    pub async fn case_results(
        pool: &PgPool,
        submission_id: i32,
    ) -> AppResult<Vec<SubmissionCaseResult>> {
        let results = sqlx::query_as::<_, SubmissionCaseResult>(
            r#"
            SELECT submission_id, test_case_id, verdict, actual_output,
                   time_ms, memory_kb, error_message
            FROM submission_case_results
            WHERE submission_id = $1
            ORDER BY test_case_id
            "#,
        )
        .bind(submission_id)
        .fetch_all(pool)
        .await?;

        Ok(results)
    }
}
