//! Question records and the payload used to create them.

use serde::Serialize;
use sqlx::FromRow;

/// A stored trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl Question {
    /// Case-insensitive substring match against the question text.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_term(&self, needle: &str) -> bool {
        self.question.to_lowercase().contains(needle)
    }
}

/// Fields supplied when adding a question.
///
/// Every field is optional; missing values reach the store as NULL and are
/// rejected there by the schema's NOT NULL constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

impl NewQuestion {
    pub fn new(question: &str, answer: &str, category: i64, difficulty: i64) -> Self {
        Self {
            question: Some(question.to_string()),
            answer: Some(answer.to_string()),
            category: Some(category),
            difficulty: Some(difficulty),
        }
    }

    /// True when every column the schema requires is present.
    pub fn is_complete(&self) -> bool {
        self.question.is_some()
            && self.answer.is_some()
            && self.category.is_some()
            && self.difficulty.is_some()
    }
}
