//! Batch practical access repository

use sqlx::PgPool;

use crate::{error::AppResult, models::BatchPracticalAccess};

/// Repository for batch practical access rows
pub struct AccessRepository;

impl AccessRepository {
    /// Find the access row for a (practical, batch) pair
    pub async fn find(
        pool: &PgPool,
        practical_id: i32,
        batch_id: i32,
    ) -> AppResult<Option<BatchPracticalAccess>> {
        let access = sqlx::query_as::<_, BatchPracticalAccess>(
            r#"
            SELECT practical_id, batch_id, locked, deadline
            FROM batch_practical_access
            WHERE practical_id = $1 AND batch_id = $2
            "#,
        )
        .bind(practical_id)
        .bind(batch_id)
        .fetch_optional(pool)
        .await?;

        Ok(access)
    }

    /// All access rows for a practical
    pub async fn list_by_practical(
        pool: &PgPool,
        practical_id: i32,
    ) -> AppResult<Vec<BatchPracticalAccess>> {
        let rows = sqlx::query_as::<_, BatchPracticalAccess>(
            r#"
            SELECT practical_id, batch_id, locked, deadline
            FROM batch_practical_access
            WHERE practical_id = $1
            ORDER BY batch_id
            "#,
        )
        .bind(practical_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Create or update the access row for a (practical, batch) pair
    pub async fn upsert(
        pool: &PgPool,
        practical_id: i32,
        batch_id: i32,
        locked: bool,
        deadline: Option<chrono::DateTime<chrono::Utc>>,
    ) -> AppResult<BatchPracticalAccess> {
        let access = sqlx::query_as::<_, BatchPracticalAccess>(
            r#"
            INSERT INTO batch_practical_access (practical_id, batch_id, locked, deadline)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (practical_id, batch_id) DO UPDATE SET
                locked = EXCLUDED.locked,
                deadline = EXCLUDED.deadline
            RETURNING practical_id, batch_id, locked, deadline
            "#,
        )
        .bind(practical_id)
        .bind(batch_id)
        .bind(locked)
        .bind(deadline)
        .fetch_one(pool)
        .await?;

        Ok(access)
    }
}
