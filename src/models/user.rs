//! User model
//!
//! User records are owned by the authentication collaborator; this crate
//! only reads them for display joins and role checks.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub role: String,
}
