//! Query interface between request handlers and the question/category store.

use crate::domain::{Category, NewQuestion, Question};
use async_trait::async_trait;
use thiserror::Error;

pub mod mock;

pub use mock::MockStore;

/// Store operations used by the HTTP handlers.
///
/// All listings are ordered by question id ascending unless noted.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories ordered by type label.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn category_exists(&self, id: i64) -> Result<bool, StoreError>;

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;

    async fn find_question(&self, id: i64) -> Result<Option<Question>, StoreError>;

    /// Persist a question and return its generated id.
    async fn insert_question(&self, question: &NewQuestion) -> Result<i64, StoreError>;

    /// Returns false if no row had that id.
    async fn delete_question(&self, id: i64) -> Result<bool, StoreError>;

    /// Questions whose text contains `term`, ignoring case.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, StoreError>;

    /// Questions not in `exclude`, restricted to `category` when given.
    async fn quiz_candidates(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> Result<Vec<Question>, StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("constraint violated: {0}")]
    Constraint(String),
}
