//! Programming language model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A supported programming language.
///
/// `judge_language_id` is the numeric identifier the external judge
/// provider uses for this language; it is never exposed to students.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProgrammingLanguage {
    pub language_id: i32,
    pub name: String,
    #[serde(skip_serializing)]
    pub judge_language_id: i32,
}
