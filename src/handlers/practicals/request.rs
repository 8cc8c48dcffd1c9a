//! Practical request DTOs

use serde::Deserialize;
use validator::Validate;

/// One fixture in a create/update payload
#[derive(Debug, Deserialize)]
pub struct TestCasePayload {
    pub input: String,
    pub expected_output: String,
    #[serde(default)]
    pub is_public: bool,
}

/// Create practical request
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePracticalRequest {
    pub course_id: i32,

    pub sr_no: i32,

    #[validate(length(min = 1, max = 256))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub max_marks: i32,

    pub test_cases: Vec<TestCasePayload>,

    pub language_ids: Vec<i32>,
}

/// Update practical request; fixture/language sets replace existing
/// ones when present
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePracticalRequest {
    #[validate(length(min = 1, max = 256))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub max_marks: i32,

    pub test_cases: Option<Vec<TestCasePayload>>,

    pub language_ids: Option<Vec<i32>>,
}
