//! Student repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Student, StudentProfile},
};

/// Repository for student database operations
pub struct StudentRepository;

impl StudentRepository {
    pub async fn create(
        pool: &PgPool,
        student_id: i32,
        roll_no: &str,
        batch_id: i32,
    ) -> AppResult<Student> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (student_id, roll_no, batch_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(student_id)
        .bind(roll_no)
        .bind(batch_id)
        .fetch_one(pool)
        .await?;

        Ok(student)
    }

    pub async fn find_by_id(pool: &PgPool, student_id: i32) -> AppResult<Option<Student>> {
        let student =
            sqlx::query_as::<_, Student>(r#"SELECT * FROM students WHERE student_id = $1"#)
                .bind(student_id)
                .fetch_optional(pool)
                .await?;

        Ok(student)
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<StudentProfile>> {
        let students = sqlx::query_as::<_, StudentProfile>(
            r#"
            SELECT s.student_id, s.roll_no, u.username, s.batch_id, b.name AS batch_name
            FROM students s
            JOIN users u ON s.student_id = u.user_id
            JOIN batches b ON s.batch_id = b.batch_id
            ORDER BY s.roll_no
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(students)
    }

    pub async fn list_by_batch(pool: &PgPool, batch_id: i32) -> AppResult<Vec<StudentProfile>> {
        let students = sqlx::query_as::<_, StudentProfile>(
            r#"
            SELECT s.student_id, s.roll_no, u.username, s.batch_id, b.name AS batch_name
            FROM students s
            JOIN users u ON s.student_id = u.user_id
            JOIN batches b ON s.batch_id = b.batch_id
            WHERE s.batch_id = $1
            ORDER BY s.roll_no
            "#,
        )
        .bind(batch_id)
        .fetch_all(pool)
        .await?;

        Ok(students)
    }

    pub async fn update(
        pool: &PgPool,
        student_id: i32,
        roll_no: &str,
        batch_id: i32,
    ) -> AppResult<Student> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students SET roll_no = $2, batch_id = $3
            WHERE student_id = $1
            RETURNING *
            "#,
        )
        .bind(student_id)
        .bind(roll_no)
        .bind(batch_id)
        .fetch_one(pool)
        .await?;

        Ok(student)
    }

    pub async fn delete(pool: &PgPool, student_id: i32) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM students WHERE student_id = $1"#)
            .bind(student_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
