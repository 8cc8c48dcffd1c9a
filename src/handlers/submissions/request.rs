//! Submission request DTOs

use serde::Deserialize;
use validator::Validate;

/// Graded submission request
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitCodeRequest {
    /// Practical to submit for
    pub practical_id: i32,

    /// Language of the submitted code
    pub language_id: i32,

    /// Source code
    #[validate(length(min = 1, max = 65536))] // 64KB max
    pub code: String,
}

/// Ungraded ad hoc run request
#[derive(Debug, Deserialize, Validate)]
pub struct RunCodeRequest {
    pub language_id: i32,

    #[validate(length(min = 1, max = 65536))]
    pub code: String,

    /// Custom stdin for the run
    #[validate(length(max = 65536))]
    pub stdin: Option<String>,
}

/// Faculty override of status and marks
#[derive(Debug, Deserialize)]
pub struct UpdateSubmissionRequest {
    pub status: String,
    pub marks: i32,
}

/// Query parameters for the faculty submissions listing
#[derive(Debug, Deserialize)]
pub struct ListSubmissionsQuery {
    pub batch_id: i32,
}
