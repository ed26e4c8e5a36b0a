use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::extract::ResourceId;
use super::AppState;
use crate::domain::{CategoryMap, Question};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions_by_category: Vec<Question>,
    pub total_questions_categorised: usize,
}

/// `GET /categories`
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state.store.list_categories().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: CategoryMap::from(categories),
    }))
}

/// `GET /categories/:category_id/questions`
///
/// Unpaginated. An unknown category is a 404; a known one with no questions
/// yields an empty list.
pub async fn get_questions_by_category(
    ResourceId(category_id): ResourceId,
    State(state): State<AppState>,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    if !state.store.category_exists(category_id).await? {
        return Err(AppError::NotFound(format!(
            "category {} does not exist",
            category_id
        )));
    }

    let questions = state.store.questions_in_category(category_id).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions_categorised: questions.len(),
        questions_by_category: questions,
    }))
}
