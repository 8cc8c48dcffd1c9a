//! Faculty model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Faculty database model (faculty_id references users.user_id)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Faculty {
    pub faculty_id: i32,
    pub department_id: i32,
}

/// Faculty row joined with the user record for listings
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FacultyProfile {
    pub faculty_id: i32,
    pub username: String,
    pub department_id: i32,
    pub department_name: String,
}
