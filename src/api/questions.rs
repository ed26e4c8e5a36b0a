use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::extract::{JsonBody, LenientInt, ResourceId};
use super::AppState;
use crate::domain::{paginate, CategoryMap, NewQuestion, Page, Question};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestionBody {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<LenientInt>,
    pub difficulty: Option<LenientInt>,
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

/// `GET /questions?page=N`
pub async fn list_questions(
    query: Option<Query<PageQuery>>,
    State(state): State<AppState>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let page = Page::from_param(query.as_ref().and_then(|Query(q)| q.page.as_deref()));

    let all = state.store.list_questions().await?;
    let questions = paginate(&all, page);
    let categories = state.store.list_categories().await?;

    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "page {} is empty ({} questions)",
            page.number(),
            all.len()
        )));
    }

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
        total_questions: all.len(),
        categories: CategoryMap::from(categories),
        current_category: None,
    }))
}

/// `DELETE /questions/:question_id`
///
/// Deleting an id that does not exist is reported as 422, not 404.
pub async fn delete_question(
    ResourceId(question_id): ResourceId,
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, AppError> {
    let missing =
        || AppError::Unprocessable(format!("question {} does not exist", question_id));

    if state.store.find_question(question_id).await?.is_none() {
        return Err(missing());
    }
    if !state.store.delete_question(question_id).await? {
        return Err(missing());
    }
    info!(question_id, "Deleted question");

    let remaining = state.store.list_questions().await?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
        questions: paginate(&remaining, Page::first()),
        total_questions: remaining.len(),
    }))
}

/// `POST /questions`
pub async fn create_question(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateQuestionBody>,
) -> Result<Json<CreatedResponse>, AppError> {
    let new_question = NewQuestion {
        question: body.question,
        answer: body.answer,
        category: body
            .category
            .as_ref()
            .map(|c| c.require("category"))
            .transpose()?,
        difficulty: body
            .difficulty
            .as_ref()
            .map(|d| d.require("difficulty"))
            .transpose()?,
    };

    if !new_question.is_complete() {
        return Err(AppError::Unprocessable(
            "question, answer, category and difficulty are required".to_string(),
        ));
    }

    let created = state.store.insert_question(&new_question).await?;
    info!(question_id = created, "Created question");

    let all = state.store.list_questions().await?;

    Ok(Json(CreatedResponse {
        success: true,
        created,
        questions: paginate(&all, Page::first()),
        total_questions: all.len(),
    }))
}

/// `POST /questions/search`
///
/// Returns every match, unpaginated. An empty or absent term is a 404.
pub async fn search_questions(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SearchBody>,
) -> Result<Json<SearchResponse>, AppError> {
    let term = match body.search_term.as_deref() {
        Some(term) if !term.is_empty() => term,
        _ => return Err(AppError::NotFound("empty search term".to_string())),
    };

    let questions = state.store.search_questions(term).await?;

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}
