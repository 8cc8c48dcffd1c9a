//! Student model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Student database model (student_id references users.user_id)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Student {
    pub student_id: i32,
    pub roll_no: String,
    pub batch_id: i32,
}

/// Student row joined with the user record for listings
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentProfile {
    pub student_id: i32,
    pub roll_no: String,
    pub username: String,
    pub batch_id: i32,
    pub batch_name: String,
}
