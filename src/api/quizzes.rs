use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use super::extract::{JsonBody, LenientInt};
use super::AppState;
use crate::domain::Question;
use crate::error::AppError;
use crate::quiz::{pick_next_question, QuizScope, ALL_CATEGORIES_MARKER};

#[derive(Debug, Deserialize)]
pub struct QuizBody {
    pub previous_q: Option<Vec<i64>>,
    pub quiz_categ: Option<QuizCategory>,
}

/// `type` is `None` only when the key is absent; an explicit `null` is
/// `Some(Value::Null)` and, like any value other than the marker, selects
/// the category named by `id`.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(rename = "type", default, deserialize_with = "present")]
    pub kind: Option<Value>,
    pub id: Option<LenientInt>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl QuizCategory {
    fn scope(&self) -> Result<QuizScope, AppError> {
        match &self.kind {
            None => Err(AppError::Unprocessable(
                "quiz_categ.type is required".to_string(),
            )),
            Some(Value::String(kind)) if kind == ALL_CATEGORIES_MARKER => Ok(QuizScope::All),
            Some(_) => {
                let id = self
                    .id
                    .as_ref()
                    .ok_or_else(|| AppError::Unprocessable("quiz_categ.id is required".to_string()))?
                    .require("quiz_categ.id")?;
                Ok(QuizScope::Category(id))
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// `POST /quizzes`
///
/// Picks a random question the player has not seen yet. A null question
/// means the scope is exhausted.
pub async fn next_question(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<QuizBody>,
) -> Result<Json<QuizResponse>, AppError> {
    let (Some(previous), Some(category)) = (body.previous_q, body.quiz_categ) else {
        return Err(AppError::Unprocessable(
            "previous_q and quiz_categ are required".to_string(),
        ));
    };
    let scope = category.scope()?;

    let candidates = state
        .store
        .quiz_candidates(scope.category(), &previous)
        .await?;
    debug!(?scope, candidates = candidates.len(), "Picking quiz question");

    Ok(Json(QuizResponse {
        success: true,
        question: pick_next_question(candidates, state.random.as_ref()),
    }))
}
