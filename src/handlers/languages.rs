//! Programming language handlers

use axum::{extract::State, routing::get, Json, Router};

use crate::{
    db::repositories::LanguageRepository,
    error::AppResult,
    models::ProgrammingLanguage,
    state::AppState,
};

/// List all supported programming languages
async fn list_languages(State(state): State<AppState>) -> AppResult<Json<Vec<ProgrammingLanguage>>> {
    let languages = LanguageRepository::list(state.db()).await?;
    Ok(Json(languages))
}

/// Language routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_languages))
}
