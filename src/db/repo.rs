//! Repository layer for database operations.

use crate::domain::{Category, NewQuestion, Question};
use crate::store::{StoreError, TriviaStore};
use async_trait::async_trait;
use sqlx::sqlite::{Sqlite, SqlitePool};
use sqlx::QueryBuilder;
use tracing::debug;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// SQLite-backed trivia store.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }
}

#[async_trait]
impl TriviaStore for Repository {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, type FROM categories ORDER BY type ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    async fn category_exists(&self, id: i64) -> Result<bool, StoreError> {
        let found: Option<(i64,)> = sqlx::query_as("SELECT id FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {} FROM questions ORDER BY id ASC",
            QUESTION_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn find_question(&self, id: i64) -> Result<Option<Question>, StoreError> {
        let question = sqlx::query_as::<_, Question>(&format!(
            "SELECT {} FROM questions WHERE id = ?",
            QUESTION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(question)
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<i64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(question.question.as_deref())
        .bind(question.answer.as_deref())
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Inserted question");
        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        // SQLite's LIKE only folds ASCII, so match in Rust for full Unicode case folding.
        let needle = term.to_lowercase();
        let questions = self.list_questions().await?;
        Ok(questions
            .into_iter()
            .filter(|q| q.matches_term(&needle))
            .collect())
    }

    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {} FROM questions WHERE category = ? ORDER BY id ASC",
            QUESTION_COLUMNS
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn quiz_candidates(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> Result<Vec<Question>, StoreError> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {} FROM questions WHERE 1 = 1",
            QUESTION_COLUMNS
        ));

        if let Some(category) = category {
            builder.push(" AND category = ").push_bind(category);
        }

        if !exclude.is_empty() {
            builder.push(" AND id NOT IN (");
            let mut ids = builder.separated(", ");
            for id in exclude {
                ids.push_bind(*id);
            }
            ids.push_unseparated(")");
        }

        builder.push(" ORDER BY id ASC");

        let questions = builder
            .build_query_as::<Question>()
            .fetch_all(&self.pool)
            .await?;
        Ok(questions)
    }
}
