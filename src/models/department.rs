//! Department model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Department database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Department {
    pub department_id: i32,
    pub name: String,
}
