//! Batch practical access service

use sqlx::PgPool;

use crate::{
    db::repositories::{AccessRepository, BatchRepository, PracticalRepository},
    error::{AppError, AppResult},
    models::BatchPracticalAccess,
};

/// Access gate management for faculty
pub struct AccessService;

impl AccessService {
    /// All access rows configured for a practical
    pub async fn get_for_practical(
        pool: &PgPool,
        practical_id: i32,
    ) -> AppResult<Vec<BatchPracticalAccess>> {
        PracticalRepository::find_by_id(pool, practical_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Practical not found".to_string()))?;

        AccessRepository::list_by_practical(pool, practical_id).await
    }

    /// Create or update the lock/deadline for a (practical, batch) pair
    pub async fn upsert(
        pool: &PgPool,
        practical_id: i32,
        batch_id: i32,
        locked: bool,
        deadline: Option<chrono::DateTime<chrono::Utc>>,
    ) -> AppResult<BatchPracticalAccess> {
        PracticalRepository::find_by_id(pool, practical_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Practical not found".to_string()))?;

        BatchRepository::find_by_id(pool, batch_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Batch not found".to_string()))?;

        AccessRepository::upsert(pool, practical_id, batch_id, locked, deadline).await
    }
}
