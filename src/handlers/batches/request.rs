//! Batch request DTOs

use serde::Deserialize;
use validator::Validate;

/// Create a batch
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBatchRequest {
    pub department_id: i32,

    #[validate(length(min = 1, max = 64))]
    pub name: String,

    #[validate(range(min = 1, max = 12))]
    pub semester: i32,
}

/// Update a batch
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBatchRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,

    #[validate(range(min = 1, max = 12))]
    pub semester: i32,
}
