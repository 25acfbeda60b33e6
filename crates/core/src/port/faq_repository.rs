// FAQ Repository Port (Interface)

use crate::domain::{Answer, AnswerId, Question, QuestionId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Question/Answer persistence
///
/// The store is dumb: it assigns identifiers and timestamps, persists rows
/// and enforces the cascade on question deletion. All domain rules live in
/// the service layer.
#[async_trait]
pub trait FaqRepository: Send + Sync {
    /// Insert a new question; the store assigns id and created_at
    async fn insert_question(&self, text: &str) -> Result<Question>;

    /// All questions, newest first (created_at DESC, id DESC), answers not populated
    async fn list_questions(&self) -> Result<Vec<Question>>;

    /// Find question by id with its answers preloaded, oldest first
    async fn find_question_with_answers(&self, id: QuestionId) -> Result<Option<Question>>;

    /// Existence probe used before inserting a child answer
    async fn question_exists(&self, id: QuestionId) -> Result<bool>;

    /// Delete question and, atomically, all its answers; returns rows matched
    async fn delete_question(&self, id: QuestionId) -> Result<u64>;

    /// Insert a new answer under a question
    async fn insert_answer(
        &self,
        question_id: QuestionId,
        user_id: &str,
        text: &str,
    ) -> Result<Answer>;

    /// Find answer by id
    async fn find_answer(&self, id: AnswerId) -> Result<Option<Answer>>;

    /// Delete answer; returns rows matched
    async fn delete_answer(&self, id: AnswerId) -> Result<u64>;
}
