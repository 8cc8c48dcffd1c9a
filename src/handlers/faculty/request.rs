//! Faculty request DTOs

use serde::Deserialize;

/// Register a faculty member (user record comes from the auth collaborator)
#[derive(Debug, Deserialize)]
pub struct CreateFacultyRequest {
    pub faculty_id: i32,
    pub department_id: i32,
}

/// Move a faculty member between departments
#[derive(Debug, Deserialize)]
pub struct UpdateFacultyRequest {
    pub department_id: i32,
}
