//! Practical service

use sqlx::PgPool;

use crate::{
    db::repositories::{practical_repo::NewTestCase, CourseRepository, PracticalRepository},
    error::{AppError, AppResult},
    handlers::practicals::request::{CreatePracticalRequest, TestCasePayload, UpdatePracticalRequest},
    handlers::practicals::response::PracticalResponse,
    models::{Practical, ProgrammingLanguage},
    utils::validation::validate_test_case_text,
};

/// Practical service for business logic
pub struct PracticalService;

impl PracticalService {
    pub async fn create(pool: &PgPool, payload: CreatePracticalRequest) -> AppResult<Practical> {
        CourseRepository::find_by_id(pool, payload.course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        // Every graded practical needs at least one fixture
        if payload.test_cases.is_empty() {
            return Err(AppError::InvalidInput(
                "A practical needs at least one test case".to_string(),
            ));
        }
        if payload.language_ids.is_empty() {
            return Err(AppError::InvalidInput(
                "A practical needs at least one allowed language".to_string(),
            ));
        }

        validate_fixtures(&payload.test_cases)?;
        let test_cases = to_new_test_cases(&payload.test_cases);

        PracticalRepository::create(
            pool,
            payload.course_id,
            payload.sr_no,
            &payload.name,
            payload.description.as_deref(),
            payload.max_marks,
            &test_cases,
            &payload.language_ids,
        )
        .await
    }

    pub async fn update(
        pool: &PgPool,
        practical_id: i32,
        payload: UpdatePracticalRequest,
    ) -> AppResult<Practical> {
        PracticalRepository::find_by_id(pool, practical_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Practical not found".to_string()))?;

        if payload.test_cases.as_ref().is_some_and(|tcs| tcs.is_empty()) {
            return Err(AppError::InvalidInput(
                "A practical needs at least one test case".to_string(),
            ));
        }

        if let Some(test_cases) = payload.test_cases.as_deref() {
            validate_fixtures(test_cases)?;
        }

        let test_cases = payload.test_cases.as_deref().map(to_new_test_cases);

        PracticalRepository::update(
            pool,
            practical_id,
            &payload.name,
            payload.description.as_deref(),
            payload.max_marks,
            test_cases.as_deref(),
            payload.language_ids.as_deref(),
        )
        .await
    }

    pub async fn delete(pool: &PgPool, practical_id: i32) -> AppResult<()> {
        if !PracticalRepository::delete(pool, practical_id).await? {
            return Err(AppError::NotFound("Practical not found".to_string()));
        }
        Ok(())
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<Practical>> {
        PracticalRepository::list(pool).await
    }

    pub async fn list_by_course(pool: &PgPool, course_id: i32) -> AppResult<Vec<Practical>> {
        PracticalRepository::list_by_course(pool, course_id).await
    }

    /// Practical with its fixtures; hidden fixtures only for staff
    pub async fn get(
        pool: &PgPool,
        practical_id: i32,
        include_hidden: bool,
    ) -> AppResult<PracticalResponse> {
        let practical = PracticalRepository::find_by_id(pool, practical_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Practical not found".to_string()))?;

        let test_cases = if include_hidden {
            PracticalRepository::test_cases(pool, practical_id).await?
        } else {
            PracticalRepository::public_test_cases(pool, practical_id).await?
        };

        let languages = PracticalRepository::languages(pool, practical_id).await?;

        Ok(PracticalResponse {
            practical,
            test_cases,
            languages,
        })
    }

    pub async fn languages(
        pool: &PgPool,
        practical_id: i32,
    ) -> AppResult<Vec<ProgrammingLanguage>> {
        PracticalRepository::find_by_id(pool, practical_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Practical not found".to_string()))?;

        PracticalRepository::languages(pool, practical_id).await
    }
}

fn validate_fixtures(payloads: &[TestCasePayload]) -> Result<(), AppError> {
    for tc in payloads {
        validate_test_case_text(&tc.input)
            .and_then(|_| validate_test_case_text(&tc.expected_output))
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;
    }
    Ok(())
}

fn to_new_test_cases(payloads: &[TestCasePayload]) -> Vec<NewTestCase> {
    payloads
        .iter()
        .map(|tc| NewTestCase {
            input: tc.input.clone(),
            expected_output: tc.expected_output.clone(),
            is_public: tc.is_public,
        })
        .collect()
}
