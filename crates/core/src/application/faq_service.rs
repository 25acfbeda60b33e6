// FAQ Service - the only place domain rules are enforced

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Answer, AnswerId, Question, QuestionId};
use crate::error::{AppError, Result};
use crate::port::FaqRepository;

/// FAQ service: validation, existence checks, error classification.
///
/// Holds no state of its own; the repository is the only shared resource
/// and its own concurrency control adjudicates simultaneous writers.
pub struct FaqService {
    repo: Arc<dyn FaqRepository>,
}

impl FaqService {
    pub fn new(repo: Arc<dyn FaqRepository>) -> Self {
        Self { repo }
    }

    /// Create a question from trimmed text. Empty text is rejected.
    pub async fn create_question(&self, text: &str) -> Result<Question> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::BadRequest("question text is empty".to_string()));
        }

        let question = self.repo.insert_question(text).await?;
        debug!(question_id = question.id, "question created");
        Ok(question)
    }

    /// All questions, newest first, without answers.
    pub async fn list_questions(&self) -> Result<Vec<Question>> {
        self.repo.list_questions().await
    }

    /// Fetch a question with its answers, oldest first.
    pub async fn get_question_with_answers(&self, id: QuestionId) -> Result<Question> {
        self.repo
            .find_question_with_answers(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("question {} not found", id)))
    }

    /// Delete a question and, atomically, all its answers.
    pub async fn delete_question(&self, id: QuestionId) -> Result<()> {
        let deleted = self.repo.delete_question(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("question {} not found", id)));
        }
        debug!(question_id = id, "question deleted");
        Ok(())
    }

    /// Create an answer under an existing question.
    ///
    /// The existence probe and the insert are not transactional with each
    /// other; a question deleted in between loses the race to the store's
    /// foreign key, which rejects the insert.
    pub async fn create_answer(
        &self,
        question_id: QuestionId,
        user_id: &str,
        text: &str,
    ) -> Result<Answer> {
        let user_id = user_id.trim();
        let text = text.trim();
        if user_id.is_empty() || text.is_empty() {
            return Err(AppError::BadRequest(
                "answer user_id and text must be non-empty".to_string(),
            ));
        }

        if !self.repo.question_exists(question_id).await? {
            return Err(AppError::NotFound(format!(
                "question {} not found",
                question_id
            )));
        }

        let answer = self.repo.insert_answer(question_id, user_id, text).await?;
        debug!(answer_id = answer.id, question_id, "answer created");
        Ok(answer)
    }

    /// Fetch a single answer.
    pub async fn get_answer(&self, id: AnswerId) -> Result<Answer> {
        self.repo
            .find_answer(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("answer {} not found", id)))
    }

    /// Delete a single answer. Never affects the parent question.
    pub async fn delete_answer(&self, id: AnswerId) -> Result<()> {
        let deleted = self.repo.delete_answer(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("answer {} not found", id)));
        }
        debug!(answer_id = id, "answer deleted");
        Ok(())
    }
}
