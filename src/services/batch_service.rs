//! Batch service

use sqlx::PgPool;

use crate::{
    db::repositories::{BatchRepository, DepartmentRepository},
    error::{AppError, AppResult},
    models::Batch,
};

/// Batch service for business logic
pub struct BatchService;

impl BatchService {
    pub async fn create(
        pool: &PgPool,
        department_id: i32,
        name: &str,
        semester: i32,
    ) -> AppResult<Batch> {
        DepartmentRepository::find_by_id(pool, department_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Department not found".to_string()))?;

        BatchRepository::create(pool, department_id, name, semester).await
    }

    pub async fn get(pool: &PgPool, batch_id: i32) -> AppResult<Batch> {
        BatchRepository::find_by_id(pool, batch_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Batch not found".to_string()))
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<Batch>> {
        BatchRepository::list(pool).await
    }

    pub async fn list_by_department(pool: &PgPool, department_id: i32) -> AppResult<Vec<Batch>> {
        BatchRepository::list_by_department(pool, department_id).await
    }

    pub async fn update(
        pool: &PgPool,
        batch_id: i32,
        name: &str,
        semester: i32,
    ) -> AppResult<Batch> {
        Self::get(pool, batch_id).await?;
        BatchRepository::update(pool, batch_id, name, semester).await
    }

    pub async fn delete(pool: &PgPool, batch_id: i32) -> AppResult<()> {
        if !BatchRepository::delete(pool, batch_id).await? {
            return Err(AppError::NotFound("Batch not found".to_string()));
        }
        Ok(())
    }
}
