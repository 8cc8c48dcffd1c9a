//! Practical repository
//!
//! Practicals own their fixtures and allowed-language rows; creating or
//! updating a practical replaces both sets in the same transaction.

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Practical, ProgrammingLanguage, TestCase},
};

/// Fixture payload used when creating or updating a practical
#[derive(Debug)]
pub struct NewTestCase {
    pub input: String,
    pub expected_output: String,
    pub is_public: bool,
}

/// Repository for practical database operations
pub struct PracticalRepository;

impl PracticalRepository {
    /// Create a practical with its fixtures and allowed languages
    pub async fn create(
        pool: &PgPool,
        course_id: i32,
        sr_no: i32,
        name: &str,
        description: Option<&str>,
        max_marks: i32,
        test_cases: &[NewTestCase],
        language_ids: &[i32],
    ) -> AppResult<Practical> {
        let mut tx = pool.begin().await?;

        let practical = sqlx::query_as::<_, Practical>(
            r#"
            INSERT INTO practicals (course_id, sr_no, name, description, max_marks)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(course_id)
        .bind(sr_no)
        .bind(name)
        .bind(description)
        .bind(max_marks)
        .fetch_one(&mut *tx)
        .await?;

        for tc in test_cases {
            sqlx::query(
                r#"
                INSERT INTO test_cases (practical_id, input, expected_output, is_public)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(practical.practical_id)
            .bind(&tc.input)
            .bind(&tc.expected_output)
            .bind(tc.is_public)
            .execute(&mut *tx)
            .await?;
        }

        for language_id in language_ids {
            sqlx::query(
                r#"INSERT INTO practical_languages (practical_id, language_id) VALUES ($1, $2)"#,
            )
            .bind(practical.practical_id)
            .bind(language_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(practical)
    }

    /// Update a practical; fixture/language sets are replaced when given
    pub async fn update(
        pool: &PgPool,
        practical_id: i32,
        name: &str,
        description: Option<&str>,
        max_marks: i32,
        test_cases: Option<&[NewTestCase]>,
        language_ids: Option<&[i32]>,
    ) -> AppResult<Practical> {
        let mut tx = pool.begin().await?;

        let practical = sqlx::query_as::<_, Practical>(
            r#"
            UPDATE practicals
            SET name = $2, description = $3, max_marks = $4
            WHERE practical_id = $1
            RETURNING *
            "#,
        )
        .bind(practical_id)
        .bind(name)
        .bind(description)
        .bind(max_marks)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(test_cases) = test_cases {
            sqlx::query(r#"DELETE FROM test_cases WHERE practical_id = $1"#)
                .bind(practical_id)
                .execute(&mut *tx)
                .await?;

            for tc in test_cases {
                sqlx::query(
                    r#"
                    INSERT INTO test_cases (practical_id, input, expected_output, is_public)
                    VALUES ($1, $2, $3, $4)
                    "#,
                )
                .bind(practical_id)
                .bind(&tc.input)
                .bind(&tc.expected_output)
                .bind(tc.is_public)
                .execute(&mut *tx)
                .await?;
            }
        }

        if let Some(language_ids) = language_ids {
            sqlx::query(r#"DELETE FROM practical_languages WHERE practical_id = $1"#)
                .bind(practical_id)
                .execute(&mut *tx)
                .await?;

            for language_id in language_ids {
                sqlx::query(
                    r#"INSERT INTO practical_languages (practical_id, language_id) VALUES ($1, $2)"#,
                )
                .bind(practical_id)
                .bind(language_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        Ok(practical)
    }

    /// Delete a practical and its dependent rows
    pub async fn delete(pool: &PgPool, practical_id: i32) -> AppResult<bool> {
        let mut tx = pool.begin().await?;

        sqlx::query(r#"DELETE FROM test_cases WHERE practical_id = $1"#)
            .bind(practical_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query(r#"DELETE FROM practical_languages WHERE practical_id = $1"#)
            .bind(practical_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query(r#"DELETE FROM batch_practical_access WHERE practical_id = $1"#)
            .bind(practical_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query(r#"DELETE FROM practicals WHERE practical_id = $1"#)
            .bind(practical_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    /// Find practical by ID
    pub async fn find_by_id(pool: &PgPool, practical_id: i32) -> AppResult<Option<Practical>> {
        let practical =
            sqlx::query_as::<_, Practical>(r#"SELECT * FROM practicals WHERE practical_id = $1"#)
                .bind(practical_id)
                .fetch_optional(pool)
                .await?;

        Ok(practical)
    }

    /// List all practicals
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Practical>> {
        let practicals =
            sqlx::query_as::<_, Practical>(r#"SELECT * FROM practicals ORDER BY course_id, sr_no"#)
                .fetch_all(pool)
                .await?;

        Ok(practicals)
    }

    /// List practicals for a course
    pub async fn list_by_course(pool: &PgPool, course_id: i32) -> AppResult<Vec<Practical>> {
        let practicals = sqlx::query_as::<_, Practical>(
            r#"SELECT * FROM practicals WHERE course_id = $1 ORDER BY sr_no"#,
        )
        .bind(course_id)
        .fetch_all(pool)
        .await?;

        Ok(practicals)
    }

    /// All fixtures for a practical (public and hidden)
    pub async fn test_cases(pool: &PgPool, practical_id: i32) -> AppResult<Vec<TestCase>> {
        let cases = sqlx::query_as::<_, TestCase>(
            r#"SELECT * FROM test_cases WHERE practical_id = $1 ORDER BY test_case_id"#,
        )
        .bind(practical_id)
        .fetch_all(pool)
        .await?;

        Ok(cases)
    }

    /// Public fixtures only, for student-facing views
    pub async fn public_test_cases(pool: &PgPool, practical_id: i32) -> AppResult<Vec<TestCase>> {
        let cases = sqlx::query_as::<_, TestCase>(
            r#"
            SELECT * FROM test_cases
            WHERE practical_id = $1 AND is_public = TRUE
            ORDER BY test_case_id
            "#,
        )
        .bind(practical_id)
        .fetch_all(pool)
        .await?;

        Ok(cases)
    }

    /// Languages a practical may be solved in
    pub async fn languages(pool: &PgPool, practical_id: i32) -> AppResult<Vec<ProgrammingLanguage>> {
        let languages = sqlx::query_as::<_, ProgrammingLanguage>(
            r#"
            SELECT pl.language_id, pl.name, pl.judge_language_id
            FROM practical_languages pls
            JOIN programming_languages pl ON pls.language_id = pl.language_id
            WHERE pls.practical_id = $1
            ORDER BY pl.name
            "#,
        )
        .bind(practical_id)
        .fetch_all(pool)
        .await?;

        Ok(languages)
    }

    /// Check whether a language is allowed for a practical
    pub async fn language_allowed(
        pool: &PgPool,
        practical_id: i32,
        language_id: i32,
    ) -> AppResult<bool> {
        let allowed: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM practical_languages
                WHERE practical_id = $1 AND language_id = $2
            )
            "#,
        )
        .bind(practical_id)
        .bind(language_id)
        .fetch_one(pool)
        .await?;

        Ok(allowed)
    }
}
