//! Practical response DTOs

use serde::Serialize;

use crate::models::{Practical, ProgrammingLanguage, TestCase};

/// Practical with its fixtures and allowed languages.
///
/// Student-facing requests only ever see public fixtures here.
#[derive(Debug, Serialize)]
pub struct PracticalResponse {
    #[serde(flatten)]
    pub practical: Practical,
    pub test_cases: Vec<TestCase>,
    pub languages: Vec<ProgrammingLanguage>,
}
