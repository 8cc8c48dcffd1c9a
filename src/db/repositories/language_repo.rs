//! Programming language repository

use sqlx::PgPool;

use crate::{error::AppResult, models::ProgrammingLanguage};

/// Repository for the supported-language enumeration
pub struct LanguageRepository;

impl LanguageRepository {
    /// List all supported languages
    pub async fn list(pool: &PgPool) -> AppResult<Vec<ProgrammingLanguage>> {
        let languages = sqlx::query_as::<_, ProgrammingLanguage>(
            r#"SELECT * FROM programming_languages ORDER BY name"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(languages)
    }

    /// Find a language by ID
    pub async fn find_by_id(
        pool: &PgPool,
        language_id: i32,
    ) -> AppResult<Option<ProgrammingLanguage>> {
        let language = sqlx::query_as::<_, ProgrammingLanguage>(
            r#"SELECT * FROM programming_languages WHERE language_id = $1"#,
        )
        .bind(language_id)
        .fetch_optional(pool)
        .await?;

        Ok(language)
    }
}
