//! Student service

use sqlx::PgPool;

use crate::{
    db::repositories::{BatchRepository, StudentRepository},
    error::{AppError, AppResult},
    models::{Student, StudentProfile},
};

/// Student service for business logic
pub struct StudentService;

impl StudentService {
    pub async fn create(
        pool: &PgPool,
        student_id: i32,
        roll_no: &str,
        batch_id: i32,
    ) -> AppResult<Student> {
        BatchRepository::find_by_id(pool, batch_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Batch not found".to_string()))?;

        StudentRepository::create(pool, student_id, roll_no, batch_id).await
    }

    pub async fn get(pool: &PgPool, student_id: i32) -> AppResult<Student> {
        StudentRepository::find_by_id(pool, student_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<StudentProfile>> {
        StudentRepository::list(pool).await
    }

    pub async fn list_by_batch(pool: &PgPool, batch_id: i32) -> AppResult<Vec<StudentProfile>> {
        StudentRepository::list_by_batch(pool, batch_id).await
    }

    pub async fn update(
        pool: &PgPool,
        student_id: i32,
        roll_no: &str,
        batch_id: i32,
    ) -> AppResult<Student> {
        Self::get(pool, student_id).await?;

        BatchRepository::find_by_id(pool, batch_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Batch not found".to_string()))?;

        StudentRepository::update(pool, student_id, roll_no, batch_id).await
    }

    pub async fn delete(pool: &PgPool, student_id: i32) -> AppResult<()> {
        if !StudentRepository::delete(pool, student_id).await? {
            return Err(AppError::NotFound("Student not found".to_string()));
        }
        Ok(())
    }
}
