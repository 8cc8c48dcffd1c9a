//! Course service

use sqlx::PgPool;

use crate::{
    db::repositories::{CourseRepository, DepartmentRepository, FacultyRepository},
    error::{AppError, AppResult},
    models::{Course, CourseWithFaculty},
};

/// Course service for business logic
pub struct CourseService;

impl CourseService {
    pub async fn create(
        pool: &PgPool,
        department_id: i32,
        name: &str,
        code: &str,
    ) -> AppResult<Course> {
        DepartmentRepository::find_by_id(pool, department_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Department not found".to_string()))?;

        CourseRepository::create(pool, department_id, name, code).await
    }

    pub async fn get(pool: &PgPool, course_id: i32) -> AppResult<CourseWithFaculty> {
        let course = CourseRepository::find_by_id(pool, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        let faculty_ids = CourseRepository::faculty_ids(pool, course_id).await?;

        Ok(CourseWithFaculty {
            course,
            faculty_ids,
        })
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<Course>> {
        CourseRepository::list(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        course_id: i32,
        name: &str,
        code: &str,
    ) -> AppResult<Course> {
        CourseRepository::find_by_id(pool, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        CourseRepository::update(pool, course_id, name, code).await
    }

    pub async fn delete(pool: &PgPool, course_id: i32) -> AppResult<()> {
        if !CourseRepository::delete(pool, course_id).await? {
            return Err(AppError::NotFound("Course not found".to_string()));
        }
        Ok(())
    }

    /// Replace a course's assigned faculty after verifying each one exists
    pub async fn assign_faculty(
        pool: &PgPool,
        course_id: i32,
        faculty_ids: &[i32],
    ) -> AppResult<()> {
        CourseRepository::find_by_id(pool, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        for faculty_id in faculty_ids {
            FacultyRepository::find_by_id(pool, *faculty_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Faculty {} not found", faculty_id))
                })?;
        }

        CourseRepository::assign_faculty(pool, course_id, faculty_ids).await
    }
}
