//! HTTP Adapter Tests
//!
//! Routes are driven in-process with `tower::ServiceExt::oneshot`:
//! - POST /solve answers 200 for every engine outcome, error results included
//! - POST /solve answers 400 for missing, blank or oversized questions
//! - GET /health and GET /metrics report status and counters

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use stepwise::http_server::{HttpServer, HttpServerConfig, REQUEST_ID_HEADER};

// =============================================================================
// Helper Functions
// =============================================================================

fn router() -> Router {
    HttpServer::new().router()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// POST /solve
// =============================================================================

#[tokio::test]
async fn test_solve_numerical() {
    let response = router()
        .oneshot(post_json("/solve", json!({"question": "What is 30 percent of 200"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));

    let body = body_json(response).await;
    assert_eq!(body["topic"], "numerical_reasoning");
    assert_eq!(body["subtype"], "percentage");
    assert_eq!(body["answer"], 60.0);
    assert_eq!(body["steps"].as_array().unwrap().len(), 6);
    assert_eq!(body["original_question"], "What is 30 percent of 200");
}

#[tokio::test]
async fn test_solve_calculus() {
    let response = router()
        .oneshot(post_json("/solve", json!({"question": "integral of x from 1 to 3"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["topic"], "integration");
    assert_eq!(body["expression"], "x");
    assert_eq!(body["limits"], json!([1, 3]));
    assert_eq!(body["animationFlow"][0], "show_formula");
    assert_eq!(body["normalized_question"], "integral of x from 1 to 3");
}

#[tokio::test]
async fn test_error_result_is_200() {
    let response = router()
        .oneshot(post_json("/solve", json!({"question": "bananas are tasty"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "STEP_UNSUPPORTED_QUESTION");
}

#[tokio::test]
async fn test_missing_question_is_400() {
    let response = router()
        .oneshot(post_json("/solve", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "STEP_HTTP_MISSING_QUESTION");
    assert_eq!(body["message"], "No question provided");
}

#[tokio::test]
async fn test_blank_question_is_400() {
    let response = router()
        .oneshot(post_json("/solve", json!({"question": "   "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "STEP_HTTP_EMPTY_QUESTION");
}

#[tokio::test]
async fn test_oversized_question_is_400() {
    let config = HttpServerConfig {
        max_question_len: 10,
        ..Default::default()
    };
    let router = HttpServer::with_config(config).router();

    let response = router
        .oneshot(post_json("/solve", json!({"question": "derivative of x^2"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "STEP_HTTP_QUESTION_TOO_LONG");
}

#[tokio::test]
async fn test_malformed_body_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/solve")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "STEP_HTTP_INVALID_BODY");
}

// =============================================================================
// GET /health, GET /metrics
// =============================================================================

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_metrics_count_outcomes() {
    let server = HttpServer::new();
    let state = server.state();
    let router = server.router();

    for question in ["derivative of x^2", "What is 30 percent of 200", "bananas are tasty"] {
        let response = router
            .clone()
            .oneshot(post_json("/solve", json!({ "question": question })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    let response = router
        .clone()
        .oneshot(post_json("/solve", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let snapshot = state.metrics().snapshot();
    assert_eq!(snapshot.questions_received, 3);
    assert_eq!(snapshot.calculus_solved, 1);
    assert_eq!(snapshot.numerical_solved, 1);
    assert_eq!(snapshot.errors_returned, 1);
    assert_eq!(snapshot.requests_rejected, 1);

    let request = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["questions_received"], 3);
    assert_eq!(body["requests_rejected"], 1);
}
