//! In-memory store for tests that need no database or a failing one.

use super::{StoreError, TriviaStore};
use crate::domain::{Category, NewQuestion, Question};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct MockData {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: i64,
}

/// Mock store holding categories and questions in memory.
#[derive(Debug, Default)]
pub struct MockStore {
    data: Mutex<MockData>,
    failing: bool,
}

impl MockStore {
    /// Create a new mock store with no data.
    pub fn new() -> Self {
        Self {
            data: Mutex::new(MockData {
                next_id: 1,
                ..MockData::default()
            }),
            failing: false,
        }
    }

    /// Add a category.
    pub fn with_category(self, id: i64, kind: &str) -> Self {
        self.lock().categories.push(Category {
            id,
            kind: kind.to_string(),
        });
        self
    }

    /// Add a question, assigning the next id.
    pub fn with_question(self, question: &str, answer: &str, category: i64, difficulty: i64) -> Self {
        let new = NewQuestion::new(question, answer, category, difficulty);
        self.push(&new);
        self
    }

    /// Make every operation fail as if the database were unreachable.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    fn lock(&self) -> MutexGuard<'_, MockData> {
        self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing {
            return Err(StoreError::Unavailable("mock store set to fail".to_string()));
        }
        Ok(())
    }

    fn push(&self, new: &NewQuestion) -> Option<i64> {
        let (Some(question), Some(answer), Some(category), Some(difficulty)) = (
            new.question.clone(),
            new.answer.clone(),
            new.category,
            new.difficulty,
        ) else {
            return None;
        };
        let mut data = self.lock();
        let id = data.next_id.max(1);
        data.next_id = id + 1;
        data.questions.push(Question {
            id,
            question,
            answer,
            category,
            difficulty,
        });
        Some(id)
    }

    fn questions_where(&self, pred: impl Fn(&Question) -> bool) -> Vec<Question> {
        let mut questions: Vec<Question> =
            self.lock().questions.iter().filter(|&q| pred(q)).cloned().collect();
        questions.sort_by_key(|q| q.id);
        questions
    }
}

#[async_trait]
impl TriviaStore for MockStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.check()?;
        let mut categories = self.lock().categories.clone();
        categories.sort_by(|a, b| a.kind.cmp(&b.kind));
        Ok(categories)
    }

    async fn category_exists(&self, id: i64) -> Result<bool, StoreError> {
        self.check()?;
        Ok(self.lock().categories.iter().any(|c| c.id == id))
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        self.check()?;
        Ok(self.questions_where(|_| true))
    }

    async fn find_question(&self, id: i64) -> Result<Option<Question>, StoreError> {
        self.check()?;
        Ok(self.lock().questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<i64, StoreError> {
        self.check()?;
        self.push(question)
            .ok_or_else(|| StoreError::Constraint("NOT NULL constraint failed".to_string()))
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StoreError> {
        self.check()?;
        let mut data = self.lock();
        let before = data.questions.len();
        data.questions.retain(|q| q.id != id);
        Ok(data.questions.len() < before)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        self.check()?;
        let needle = term.to_lowercase();
        Ok(self.questions_where(|q| q.matches_term(&needle)))
    }

    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, StoreError> {
        self.check()?;
        Ok(self.questions_where(|q| q.category == category))
    }

    async fn quiz_candidates(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> Result<Vec<Question>, StoreError> {
        self.check()?;
        Ok(self.questions_where(|q| {
            category.map_or(true, |c| q.category == c) && !exclude.contains(&q.id)
        }))
    }
}
