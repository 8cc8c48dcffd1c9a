//! Batch model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A cohort of students sharing a division/semester grouping.
///
/// Batches scope practical access control: lock flags and deadlines are
/// set per (practical, batch) pair.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Batch {
    pub batch_id: i32,
    pub department_id: i32,
    pub name: String,
    pub semester: i32,
}
