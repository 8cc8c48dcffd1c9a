//! Access request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Create or update the access row for a (practical, batch) pair
#[derive(Debug, Deserialize)]
pub struct UpsertAccessRequest {
    pub practical_id: i32,
    pub batch_id: i32,
    #[serde(default)]
    pub locked: bool,
    pub deadline: Option<DateTime<Utc>>,
}
