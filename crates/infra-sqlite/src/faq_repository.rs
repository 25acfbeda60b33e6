// SQLite FaqRepository Implementation

use async_trait::async_trait;
use faq_core::domain::{Answer, AnswerId, Question, QuestionId};
use faq_core::error::{AppError, Result};
use faq_core::port::{FaqRepository, TimeProvider};
use sqlx::SqlitePool;
use std::sync::Arc;

// Helper to convert sqlx::Error to AppError with structured information
fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            // Extract database-specific error code and message
            if let Some(code) = db_err.code() {
                let code_str = code.as_ref();

                // SQLite error codes: https://www.sqlite.org/rescode.html
                match code_str {
                    "2067" | "1555" => AppError::Database(format!(
                        "Unique constraint violation: {} ({})",
                        db_err.message(),
                        code_str
                    )),
                    "787" | "3850" => AppError::Database(format!(
                        "Foreign key constraint violation: {} ({})",
                        db_err.message(),
                        code_str
                    )),
                    "5" => AppError::Database(format!(
                        "Database locked (SQLITE_BUSY): {}",
                        db_err.message()
                    )),
                    "13" => AppError::Database(format!("Database full: {}", db_err.message())),
                    _ => AppError::Database(format!(
                        "Database error [{}]: {}",
                        code_str,
                        db_err.message()
                    )),
                }
            } else {
                AppError::Database(format!("Database error: {}", db_err.message()))
            }
        }
        sqlx::Error::RowNotFound => AppError::Database("Row not found".to_string()),
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Database(format!("Column not found: {}", col))
        }
        _ => {
            // Connection, pool, protocol errors
            AppError::Database(err.to_string())
        }
    }
}

pub struct SqliteFaqRepository {
    pool: SqlitePool,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteFaqRepository {
    pub fn new(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            pool,
            time_provider,
        }
    }
}

#[async_trait]
impl FaqRepository for SqliteFaqRepository {
    async fn insert_question(&self, text: &str) -> Result<Question> {
        let created_at = self.time_provider.now_millis();

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO questions (text, created_at) VALUES (?, ?) RETURNING id",
        )
        .bind(text)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Question::new(id, text, created_at))
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, text, created_at FROM questions
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(|row| row.into_question()).collect())
    }

    async fn find_question_with_answers(&self, id: QuestionId) -> Result<Option<Question>> {
        let row: Option<QuestionRow> =
            sqlx::query_as("SELECT id, text, created_at FROM questions WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let answers: Vec<AnswerRow> = sqlx::query_as(
            r#"
            SELECT id, question_id, user_id, text, created_at FROM answers
            WHERE question_id = ?
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let mut question = row.into_question();
        question.answers = answers.into_iter().map(|row| row.into_answer()).collect();
        Ok(Some(question))
    }

    async fn question_exists(&self, id: QuestionId) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(count > 0)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<u64> {
        // Single statement; the ON DELETE CASCADE foreign key removes the
        // question's answers in the same atomic operation.
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn insert_answer(
        &self,
        question_id: QuestionId,
        user_id: &str,
        text: &str,
    ) -> Result<Answer> {
        let created_at = self.time_provider.now_millis();

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO answers (question_id, user_id, text, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(question_id)
        .bind(user_id)
        .bind(text)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Answer {
            id,
            question_id,
            user_id: user_id.to_string(),
            text: text.to_string(),
            created_at,
        })
    }

    async fn find_answer(&self, id: AnswerId) -> Result<Option<Answer>> {
        let row: Option<AnswerRow> = sqlx::query_as(
            "SELECT id, question_id, user_id, text, created_at FROM answers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(|r| r.into_answer()))
    }

    async fn delete_answer(&self, id: AnswerId) -> Result<u64> {
        let result = sqlx::query("DELETE FROM answers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}

/// SQLite row representations
#[derive(Debug, sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    text: String,
    created_at: i64,
}

impl QuestionRow {
    fn into_question(self) -> Question {
        Question::new(self.id, self.text, self.created_at)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AnswerRow {
    id: i64,
    question_id: i64,
    user_id: String,
    text: String,
    created_at: i64,
}

impl AnswerRow {
    fn into_answer(self) -> Answer {
        Answer {
            id: self.id,
            question_id: self.question_id,
            user_id: self.user_id,
            text: self.text,
            created_at: self.created_at,
        }
    }
}
