//! HTTP request handlers for the FAQ API.
//!
//! Route table:
//!   GET    /questions                 -> list_questions
//!   POST   /questions                 -> create_question {text}
//!   GET    /questions/:id             -> get_question_with_answers
//!   DELETE /questions/:id             -> delete_question
//!   POST   /questions/:id/answers     -> create_answer {user_id, text}
//!   GET    /answers/:id               -> get_answer
//!   DELETE /answers/:id               -> delete_answer
//!
//! Unmatched paths fall through to 404, a matched path with an unsupported
//! method to 405 (axum defaults).

use crate::error::ApiError;
use axum::{
    extract::{rejection::JsonRejection, Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use faq_core::application::FaqService;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// FAQ service (the only collaborator the router talks to)
    pub service: Arc<FaqService>,
}

/// Question creation request
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub text: String,
}

/// Answer creation request
#[derive(Debug, Deserialize)]
pub struct CreateAnswerRequest {
    pub user_id: String,
    pub text: String,
}

// Identifiers arrive as non-negative integers; axum's Path<u64> rejects
// anything else with 400 before the handler runs. Values beyond i64 can
// never match a store-assigned id, so they are malformed too.
fn to_entity_id(raw: u64) -> Result<i64, ApiError> {
    i64::try_from(raw).map_err(|_| ApiError::BadRequest("invalid id".to_string()))
}

fn decode<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ApiError::BadRequest(format!("bad json: {}", rejection))),
    }
}

/// POST /questions - Create a question
async fn create_question(
    State(state): State<AppState>,
    body: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let req = decode(body)?;
    let question = state.service.create_question(&req.text).await?;
    Ok((StatusCode::CREATED, Json(question)).into_response())
}

/// GET /questions - List questions, newest first, answers omitted
async fn list_questions(State(state): State<AppState>) -> Result<Response, ApiError> {
    let questions = state.service.list_questions().await?;
    Ok(Json(questions).into_response())
}

/// GET /questions/:id - Fetch a question with its answers, oldest first
async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, ApiError> {
    let question = state
        .service
        .get_question_with_answers(to_entity_id(id)?)
        .await?;
    Ok(Json(question).into_response())
}

/// DELETE /questions/:id - Delete a question and all its answers
async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, ApiError> {
    state.service.delete_question(to_entity_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// POST /questions/:id/answers - Create an answer under a question
async fn create_answer(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Result<Json<CreateAnswerRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let question_id = to_entity_id(id)?;
    let req = decode(body)?;
    let answer = state
        .service
        .create_answer(question_id, &req.user_id, &req.text)
        .await?;
    Ok((StatusCode::CREATED, Json(answer)).into_response())
}

/// GET /answers/:id - Fetch a single answer
async fn get_answer(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, ApiError> {
    let answer = state.service.get_answer(to_entity_id(id)?).await?;
    Ok(Json(answer).into_response())
}

/// DELETE /answers/:id - Delete a single answer
async fn delete_answer(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, ApiError> {
    state.service.delete_answer(to_entity_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Request logging middleware: method, path, status, duration.
/// Side channel only; never alters the response.
async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request handled"
    );
    response
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/:id", get(get_question).delete(delete_question))
        .route("/questions/:id/answers", post(create_answer))
        .route("/answers/:id", get(get_answer).delete(delete_answer))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
