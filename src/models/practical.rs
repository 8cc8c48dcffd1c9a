//! Practical model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A graded coding exercise belonging to a course.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Practical {
    pub practical_id: i32,
    pub course_id: i32,
    pub sr_no: i32,
    pub name: String,
    pub description: Option<String>,
    /// Full credit for this practical; marks are derived from it at
    /// aggregation time.
    pub max_marks: i32,
}
