//! Course model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Course database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Course {
    pub course_id: i32,
    pub department_id: i32,
    pub name: String,
    pub code: String,
}

/// Course with its assigned faculty user ids
#[derive(Debug, Clone, Serialize)]
pub struct CourseWithFaculty {
    #[serde(flatten)]
    pub course: Course,
    pub faculty_ids: Vec<i32>,
}
