//! Solve HTTP Routes
//!
//! `POST /solve` with `{"question": "..."}`.
//!
//! - 200 with the solve result, including error results
//! - 400 when the question is missing, blank or too long
//!
//! Every accepted or refused request gets a UUID request id. It is logged
//! with each line for the request and returned in `x-request-id`.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use super::errors::{ServeError, ServeResult};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::solver::{solve, SolveResult};

/// Response header carrying the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Shared state for the solve and metrics routes
#[derive(Debug)]
pub struct SolveState {
    max_question_len: usize,
    metrics: MetricsRegistry,
}

impl SolveState {
    pub fn new(max_question_len: usize) -> Self {
        Self {
            max_question_len,
            metrics: MetricsRegistry::new(),
        }
    }

    pub fn max_question_len(&self) -> usize {
        self.max_question_len
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }
}

/// Body of `POST /solve`
#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    #[serde(default)]
    pub question: Option<String>,
}

/// Create solve routes
pub fn solve_routes(state: Arc<SolveState>) -> Router {
    Router::new()
        .route("/solve", post(solve_handler))
        .with_state(state)
}

/// Checks a request body and returns the question to solve
pub fn validate_question(
    payload: Result<Json<SolveRequest>, JsonRejection>,
    max_len: usize,
) -> ServeResult<String> {
    let Json(request) = payload.map_err(|e| ServeError::InvalidBody(e.body_text()))?;
    let question = request.question.ok_or(ServeError::MissingQuestion)?;

    if question.trim().is_empty() {
        return Err(ServeError::EmptyQuestion);
    }
    let len = question.chars().count();
    if len > max_len {
        return Err(ServeError::QuestionTooLong { len, max: max_len });
    }

    Ok(question)
}

fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

async fn solve_handler(
    State(state): State<Arc<SolveState>>,
    payload: Result<Json<SolveRequest>, JsonRejection>,
) -> Response {
    let request_id = Uuid::new_v4().to_string();

    let question = match validate_question(payload, state.max_question_len) {
        Ok(question) => question,
        Err(err) => {
            state.metrics.increment_requests_rejected();
            log_event_with_fields(
                Event::RequestRejected,
                &[("code", err.code()), ("request_id", &request_id)],
            );
            return with_request_id(err.into_response(), &request_id);
        }
    };

    state.metrics.increment_questions_received();
    let len = question.chars().count().to_string();
    log_event_with_fields(
        Event::QuestionReceived,
        &[("length", &len), ("request_id", &request_id)],
    );

    let result = solve(&question);

    let outcome = match &result {
        SolveResult::Calculus(r) => {
            state.metrics.increment_calculus_solved();
            r.topic.as_str()
        }
        SolveResult::Numerical(r) => {
            state.metrics.increment_numerical_solved();
            r.subtype.as_str()
        }
        SolveResult::Error(e) => {
            state.metrics.increment_errors_returned();
            e.code.as_str()
        }
    };
    log_event_with_fields(
        Event::QuestionSolved,
        &[("outcome", outcome), ("request_id", &request_id)],
    );

    with_request_id(Json(result).into_response(), &request_id)
}
