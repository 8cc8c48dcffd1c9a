//! Batch repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Batch};

/// Repository for batch database operations
pub struct BatchRepository;

impl BatchRepository {
    pub async fn create(
        pool: &PgPool,
        department_id: i32,
        name: &str,
        semester: i32,
    ) -> AppResult<Batch> {
        let batch = sqlx::query_as::<_, Batch>(
            r#"
            INSERT INTO batches (department_id, name, semester)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(department_id)
        .bind(name)
        .bind(semester)
        .fetch_one(pool)
        .await?;

        Ok(batch)
    }

    pub async fn find_by_id(pool: &PgPool, batch_id: i32) -> AppResult<Option<Batch>> {
        let batch = sqlx::query_as::<_, Batch>(r#"SELECT * FROM batches WHERE batch_id = $1"#)
            .bind(batch_id)
            .fetch_optional(pool)
            .await?;

        Ok(batch)
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<Batch>> {
        let batches =
            sqlx::query_as::<_, Batch>(r#"SELECT * FROM batches ORDER BY department_id, name"#)
                .fetch_all(pool)
                .await?;

        Ok(batches)
    }

    pub async fn list_by_department(pool: &PgPool, department_id: i32) -> AppResult<Vec<Batch>> {
        let batches = sqlx::query_as::<_, Batch>(
            r#"SELECT * FROM batches WHERE department_id = $1 ORDER BY name"#,
        )
        .bind(department_id)
        .fetch_all(pool)
        .await?;

        Ok(batches)
    }

    pub async fn update(
        pool: &PgPool,
        batch_id: i32,
        name: &str,
        semester: i32,
    ) -> AppResult<Batch> {
        let batch = sqlx::query_as::<_, Batch>(
            r#"
            UPDATE batches SET name = $2, semester = $3
            WHERE batch_id = $1
            RETURNING *
            "#,
        )
        .bind(batch_id)
        .bind(name)
        .bind(semester)
        .fetch_one(pool)
        .await?;

        Ok(batch)
    }

    pub async fn delete(pool: &PgPool, batch_id: i32) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM batches WHERE batch_id = $1"#)
            .bind(batch_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
