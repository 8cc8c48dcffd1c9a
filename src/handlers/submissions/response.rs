//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Response to a graded submission
#[derive(Debug, Serialize)]
pub struct SubmitCodeResponse {
    pub submission_id: i32,
    pub status: String,
    pub message: String,
}

/// Polling façade response
#[derive(Debug, Serialize)]
pub struct SubmissionStatusResponse {
    pub submission_id: i32,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<String>,
    pub marks: i32,
    /// True only once the submission reached a terminal status
    pub completed: bool,
    /// Per-case results recorded so far (partial mid-evaluation)
    pub results: Vec<CaseResultView>,
}

/// One per-case result as shown to the client
#[derive(Debug, Serialize)]
pub struct CaseResultView {
    pub test_case_id: i32,
    pub verdict: String,
    /// Absent for hidden fixtures in the student view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_output: Option<String>,
    pub time_ms: Option<f64>,
    pub memory_kb: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Full submission detail for staff review
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct SubmissionDetailResponse {
    pub submission_id: i32,
    pub practical_id: i32,
    pub practical_sr_no: i32,
    pub practical_name: String,
    pub course_name: String,
    pub language_name: String,
    pub student_id: i32,
    pub code: String,
    pub status: String,
    pub reject_reason: Option<String>,
    pub marks: i32,
    pub submitted_at: DateTime<Utc>,
    pub judged_at: Option<DateTime<Utc>>,
}
