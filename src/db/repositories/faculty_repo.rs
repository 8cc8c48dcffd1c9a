//! Faculty repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Faculty, FacultyProfile},
};

/// Repository for faculty database operations
pub struct FacultyRepository;

impl FacultyRepository {
    pub async fn create(pool: &PgPool, faculty_id: i32, department_id: i32) -> AppResult<Faculty> {
        let faculty = sqlx::query_as::<_, Faculty>(
            r#"
            INSERT INTO faculty (faculty_id, department_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(faculty_id)
        .bind(department_id)
        .fetch_one(pool)
        .await?;

        Ok(faculty)
    }

    pub async fn find_by_id(pool: &PgPool, faculty_id: i32) -> AppResult<Option<Faculty>> {
        let faculty = sqlx::query_as::<_, Faculty>(r#"SELECT * FROM faculty WHERE faculty_id = $1"#)
            .bind(faculty_id)
            .fetch_optional(pool)
            .await?;

        Ok(faculty)
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<FacultyProfile>> {
        let faculty = sqlx::query_as::<_, FacultyProfile>(
            r#"
            SELECT f.faculty_id, u.username, f.department_id, d.name AS department_name
            FROM faculty f
            JOIN users u ON f.faculty_id = u.user_id
            JOIN departments d ON f.department_id = d.department_id
            ORDER BY u.username
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(faculty)
    }

    pub async fn update(pool: &PgPool, faculty_id: i32, department_id: i32) -> AppResult<Faculty> {
        let faculty = sqlx::query_as::<_, Faculty>(
            r#"
            UPDATE faculty SET department_id = $2
            WHERE faculty_id = $1
            RETURNING *
            "#,
        )
        .bind(faculty_id)
        .bind(department_id)
        .fetch_one(pool)
        .await?;

        Ok(faculty)
    }

    pub async fn delete(pool: &PgPool, faculty_id: i32) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM faculty WHERE faculty_id = $1"#)
            .bind(faculty_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
