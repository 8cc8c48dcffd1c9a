//! Department repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Department};

/// Repository for department database operations
pub struct DepartmentRepository;

impl DepartmentRepository {
    pub async fn create(pool: &PgPool, name: &str) -> AppResult<Department> {
        let department = sqlx::query_as::<_, Department>(
            r#"INSERT INTO departments (name) VALUES ($1) RETURNING *"#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(department)
    }

    pub async fn find_by_id(pool: &PgPool, department_id: i32) -> AppResult<Option<Department>> {
        let department =
            sqlx::query_as::<_, Department>(r#"SELECT * FROM departments WHERE department_id = $1"#)
                .bind(department_id)
                .fetch_optional(pool)
                .await?;

        Ok(department)
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<Department>> {
        let departments =
            sqlx::query_as::<_, Department>(r#"SELECT * FROM departments ORDER BY name"#)
                .fetch_all(pool)
                .await?;

        Ok(departments)
    }

    pub async fn update(pool: &PgPool, department_id: i32, name: &str) -> AppResult<Department> {
        let department = sqlx::query_as::<_, Department>(
            r#"UPDATE departments SET name = $2 WHERE department_id = $1 RETURNING *"#,
        )
        .bind(department_id)
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(department)
    }

    pub async fn delete(pool: &PgPool, department_id: i32) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM departments WHERE department_id = $1"#)
            .bind(department_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
