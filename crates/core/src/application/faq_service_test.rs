// Unit tests for FaqService against an in-memory repository

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::FaqService;
use crate::domain::{Answer, AnswerId, Question, QuestionId};
use crate::error::{AppError, Result};
use crate::port::FaqRepository;

/// In-memory FaqRepository for service-level tests.
/// Each insert gets a fresh id and a strictly increasing timestamp.
#[derive(Default)]
struct MemoryState {
    questions: Vec<Question>,
    answers: Vec<Answer>,
    next_id: i64,
    clock: i64,
}

#[derive(Default)]
struct MemoryRepo {
    state: Mutex<MemoryState>,
}

impl MemoryState {
    fn tick(&mut self) -> (i64, i64) {
        self.next_id += 1;
        self.clock += 1;
        (self.next_id, self.clock)
    }
}

#[async_trait]
impl FaqRepository for MemoryRepo {
    async fn insert_question(&self, text: &str) -> Result<Question> {
        let mut state = self.state.lock().unwrap();
        let (id, created_at) = state.tick();
        let question = Question::new(id, text, created_at);
        state.questions.push(question.clone());
        Ok(question)
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        let state = self.state.lock().unwrap();
        let mut questions = state.questions.clone();
        questions.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(questions)
    }

    async fn find_question_with_answers(&self, id: QuestionId) -> Result<Option<Question>> {
        let state = self.state.lock().unwrap();
        let Some(mut question) = state.questions.iter().find(|q| q.id == id).cloned() else {
            return Ok(None);
        };
        question.answers = state
            .answers
            .iter()
            .filter(|a| a.question_id == id)
            .cloned()
            .collect();
        question
            .answers
            .sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        Ok(Some(question))
    }

    async fn question_exists(&self, id: QuestionId) -> Result<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.questions.iter().any(|q| q.id == id))
    }

    async fn delete_question(&self, id: QuestionId) -> Result<u64> {
        let mut state = self.state.lock().unwrap();
        let before = state.questions.len();
        state.questions.retain(|q| q.id != id);
        if state.questions.len() == before {
            return Ok(0);
        }
        // Cascade, like the real store's foreign key
        state.answers.retain(|a| a.question_id != id);
        Ok(1)
    }

    async fn insert_answer(
        &self,
        question_id: QuestionId,
        user_id: &str,
        text: &str,
    ) -> Result<Answer> {
        let mut state = self.state.lock().unwrap();
        if !state.questions.iter().any(|q| q.id == question_id) {
            return Err(AppError::Database(
                "FOREIGN KEY constraint failed".to_string(),
            ));
        }
        let (id, created_at) = state.tick();
        let answer = Answer {
            id,
            question_id,
            user_id: user_id.to_string(),
            text: text.to_string(),
            created_at,
        };
        state.answers.push(answer.clone());
        Ok(answer)
    }

    async fn find_answer(&self, id: AnswerId) -> Result<Option<Answer>> {
        let state = self.state.lock().unwrap();
        Ok(state.answers.iter().find(|a| a.id == id).cloned())
    }

    async fn delete_answer(&self, id: AnswerId) -> Result<u64> {
        let mut state = self.state.lock().unwrap();
        let before = state.answers.len();
        state.answers.retain(|a| a.id != id);
        Ok((before - state.answers.len()) as u64)
    }
}

fn service() -> FaqService {
    FaqService::new(Arc::new(MemoryRepo::default()))
}

#[tokio::test]
async fn test_create_question_trims_text() {
    let svc = service();

    let question = svc.create_question("  Why is the sky blue?  ").await.unwrap();
    assert_eq!(question.text, "Why is the sky blue?");
    assert!(question.answers.is_empty());
}

#[tokio::test]
async fn test_create_question_rejects_whitespace_text() {
    let svc = service();

    for text in ["", "   ", "\t\n"] {
        let err = svc.create_question(text).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)), "text {:?}", text);
    }
}

#[tokio::test]
async fn test_get_question_not_found() {
    let svc = service();

    let err = svc.get_question_with_answers(42).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_fresh_question_has_no_answers() {
    let svc = service();

    let created = svc.create_question("Why?").await.unwrap();
    let fetched = svc.get_question_with_answers(created.id).await.unwrap();
    assert!(fetched.answers.is_empty());
}

#[tokio::test]
async fn test_answers_ordered_oldest_first() {
    let svc = service();

    let question = svc.create_question("Why?").await.unwrap();
    let a1 = svc.create_answer(question.id, "u1", "first").await.unwrap();
    let a2 = svc.create_answer(question.id, "u2", "second").await.unwrap();
    let a3 = svc.create_answer(question.id, "u3", "third").await.unwrap();

    let fetched = svc.get_question_with_answers(question.id).await.unwrap();
    let ids: Vec<_> = fetched.answers.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![a1.id, a2.id, a3.id]);
}

#[tokio::test]
async fn test_list_questions_newest_first() {
    let svc = service();

    let q1 = svc.create_question("first").await.unwrap();
    let q2 = svc.create_question("second").await.unwrap();

    let listed = svc.list_questions().await.unwrap();
    let ids: Vec<_> = listed.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![q2.id, q1.id]);
    assert!(listed.iter().all(|q| q.answers.is_empty()));
}

#[tokio::test]
async fn test_create_answer_validates_fields() {
    let svc = service();
    let question = svc.create_question("Why?").await.unwrap();

    let err = svc.create_answer(question.id, "  ", "text").await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = svc.create_answer(question.id, "u1", "  ").await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    // Nothing inserted by the rejected calls
    let fetched = svc.get_question_with_answers(question.id).await.unwrap();
    assert!(fetched.answers.is_empty());
}

#[tokio::test]
async fn test_create_answer_trims_fields() {
    let svc = service();
    let question = svc.create_question("Why?").await.unwrap();

    let answer = svc
        .create_answer(question.id, " u1 ", " Because. ")
        .await
        .unwrap();
    assert_eq!(answer.user_id, "u1");
    assert_eq!(answer.text, "Because.");
    assert_eq!(answer.question_id, question.id);
}

#[tokio::test]
async fn test_create_answer_missing_parent() {
    let svc = service();

    let err = svc.create_answer(999, "u1", "text").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_question_cascades() {
    let svc = service();

    let question = svc.create_question("Why?").await.unwrap();
    let a1 = svc.create_answer(question.id, "u1", "one").await.unwrap();
    let a2 = svc.create_answer(question.id, "u2", "two").await.unwrap();

    svc.delete_question(question.id).await.unwrap();

    let err = svc.get_question_with_answers(question.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    for id in [a1.id, a2.id] {
        let err = svc.get_answer(id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}

#[tokio::test]
async fn test_delete_answer_keeps_parent() {
    let svc = service();

    let question = svc.create_question("Why?").await.unwrap();
    let answer = svc.create_answer(question.id, "u1", "one").await.unwrap();

    svc.delete_answer(answer.id).await.unwrap();

    let err = svc.get_answer(answer.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    let fetched = svc.get_question_with_answers(question.id).await.unwrap();
    assert!(fetched.answers.is_empty());
}

#[tokio::test]
async fn test_delete_absent_entities_not_found() {
    let svc = service();

    assert!(matches!(
        svc.delete_question(1).await.unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        svc.delete_answer(1).await.unwrap_err(),
        AppError::NotFound(_)
    ));
}
