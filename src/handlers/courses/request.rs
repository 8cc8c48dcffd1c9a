//! Course request DTOs

use serde::Deserialize;
use validator::Validate;

/// Create a course
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    pub department_id: i32,

    #[validate(length(min = 1, max = 128))]
    pub name: String,

    #[validate(length(min = 1, max = 32))]
    pub code: String,
}

/// Update a course
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,

    #[validate(length(min = 1, max = 32))]
    pub code: String,
}

/// Replace a course's assigned faculty
#[derive(Debug, Deserialize)]
pub struct AssignFacultyRequest {
    pub faculty_ids: Vec<i32>,
}
