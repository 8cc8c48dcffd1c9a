//! Department request DTOs

use serde::Deserialize;
use validator::Validate;

/// Create or update a department
#[derive(Debug, Deserialize, Validate)]
pub struct DepartmentRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
}
