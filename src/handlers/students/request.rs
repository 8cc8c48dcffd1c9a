//! Student request DTOs

use serde::Deserialize;
use validator::Validate;

/// Enroll a student (user record comes from the auth collaborator)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    pub student_id: i32,

    #[validate(length(min = 1, max = 32))]
    pub roll_no: String,

    pub batch_id: i32,
}

/// Update a student's enrollment
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, max = 32))]
    pub roll_no: String,

    pub batch_id: i32,
}
