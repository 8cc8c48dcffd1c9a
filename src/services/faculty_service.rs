//! Faculty service

use sqlx::PgPool;

use crate::{
    db::repositories::{DepartmentRepository, FacultyRepository},
    error::{AppError, AppResult},
    models::{Faculty, FacultyProfile},
};

/// Faculty service for business logic
pub struct FacultyService;

impl FacultyService {
    pub async fn create(pool: &PgPool, faculty_id: i32, department_id: i32) -> AppResult<Faculty> {
        DepartmentRepository::find_by_id(pool, department_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Department not found".to_string()))?;

        FacultyRepository::create(pool, faculty_id, department_id).await
    }

    pub async fn get(pool: &PgPool, faculty_id: i32) -> AppResult<Faculty> {
        FacultyRepository::find_by_id(pool, faculty_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Faculty not found".to_string()))
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<FacultyProfile>> {
        FacultyRepository::list(pool).await
    }

    pub async fn update(pool: &PgPool, faculty_id: i32, department_id: i32) -> AppResult<Faculty> {
        Self::get(pool, faculty_id).await?;

        DepartmentRepository::find_by_id(pool, department_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Department not found".to_string()))?;

        FacultyRepository::update(pool, faculty_id, department_id).await
    }

    pub async fn delete(pool: &PgPool, faculty_id: i32) -> AppResult<()> {
        if !FacultyRepository::delete(pool, faculty_id).await? {
            return Err(AppError::NotFound("Faculty not found".to_string()));
        }
        Ok(())
    }
}
