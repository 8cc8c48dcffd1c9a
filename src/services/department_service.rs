//! Department service

use sqlx::PgPool;

use crate::{
    db::repositories::DepartmentRepository,
    error::{AppError, AppResult},
    models::Department,
};

/// Department service for business logic
pub struct DepartmentService;

impl DepartmentService {
    pub async fn create(pool: &PgPool, name: &str) -> AppResult<Department> {
        DepartmentRepository::create(pool, name).await
    }

    pub async fn get(pool: &PgPool, department_id: i32) -> AppResult<Department> {
        DepartmentRepository::find_by_id(pool, department_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Department not found".to_string()))
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<Department>> {
        DepartmentRepository::list(pool).await
    }

    pub async fn update(pool: &PgPool, department_id: i32, name: &str) -> AppResult<Department> {
        Self::get(pool, department_id).await?;
        DepartmentRepository::update(pool, department_id, name).await
    }

    pub async fn delete(pool: &PgPool, department_id: i32) -> AppResult<()> {
        if !DepartmentRepository::delete(pool, department_id).await? {
            return Err(AppError::NotFound("Department not found".to_string()));
        }
        Ok(())
    }
}
