//! Course repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Course};

/// Repository for course database operations
pub struct CourseRepository;

impl CourseRepository {
    pub async fn create(
        pool: &PgPool,
        department_id: i32,
        name: &str,
        code: &str,
    ) -> AppResult<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (department_id, name, code)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(department_id)
        .bind(name)
        .bind(code)
        .fetch_one(pool)
        .await?;

        Ok(course)
    }

    pub async fn find_by_id(pool: &PgPool, course_id: i32) -> AppResult<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(r#"SELECT * FROM courses WHERE course_id = $1"#)
            .bind(course_id)
            .fetch_optional(pool)
            .await?;

        Ok(course)
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(r#"SELECT * FROM courses ORDER BY code"#)
            .fetch_all(pool)
            .await?;

        Ok(courses)
    }

    pub async fn update(
        pool: &PgPool,
        course_id: i32,
        name: &str,
        code: &str,
    ) -> AppResult<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            UPDATE courses SET name = $2, code = $3
            WHERE course_id = $1
            RETURNING *
            "#,
        )
        .bind(course_id)
        .bind(name)
        .bind(code)
        .fetch_one(pool)
        .await?;

        Ok(course)
    }

    pub async fn delete(pool: &PgPool, course_id: i32) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM courses WHERE course_id = $1"#)
            .bind(course_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Replace the faculty assigned to a course
    pub async fn assign_faculty(
        pool: &PgPool,
        course_id: i32,
        faculty_ids: &[i32],
    ) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        sqlx::query(r#"DELETE FROM course_faculty WHERE course_id = $1"#)
            .bind(course_id)
            .execute(&mut *tx)
            .await?;

        for faculty_id in faculty_ids {
            sqlx::query(r#"INSERT INTO course_faculty (course_id, faculty_id) VALUES ($1, $2)"#)
                .bind(course_id)
                .bind(faculty_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Faculty user ids assigned to a course
    pub async fn faculty_ids(pool: &PgPool, course_id: i32) -> AppResult<Vec<i32>> {
        let ids: Vec<i32> = sqlx::query_scalar(
            r#"SELECT faculty_id FROM course_faculty WHERE course_id = $1 ORDER BY faculty_id"#,
        )
        .bind(course_id)
        .fetch_all(pool)
        .await?;

        Ok(ids)
    }
}
