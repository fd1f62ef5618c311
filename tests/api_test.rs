mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use quizgen::router;
use serde_json::Value;
use tower::ServiceExt;

async fn app() -> axum::Router {
    router(common::test_state().await)
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[tokio::test]
async fn status_route_answers_without_a_database() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .expect("request build should succeed"),
        )
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "API de ChatGPT funcionando correctamente");
    assert!(body["status"].is_string());
}

#[tokio::test]
async fn questions_without_topic_is_rejected_before_any_external_call() {
    let cases = [r#"{}"#, r#"{"topic":""}"#];

    for case in cases {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/questions")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(case))
            .expect("request build should succeed");

        let resp = app().await.oneshot(req).await.expect("router should respond");

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "for body {case}");
        let body = body_json(resp).await;
        assert_eq!(body["error"], "Por favor, proporciona un tema.");
    }
}

#[tokio::test]
async fn quiz_result_without_name_surfaces_as_a_store_failure() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/quiz-result")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"questions":[]}"#))
        .expect("request build should succeed");

    let resp = app().await.oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Error al guardar el resultado");
}

#[tokio::test]
async fn chat_without_message_is_rejected() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{}"#))
        .expect("request build should succeed");

    let resp = app().await.oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Por favor, proporciona un mensaje.");
}

#[tokio::test]
async fn preflight_allows_any_origin() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/questions")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .expect("request build should succeed");

    let resp = app().await.oneshot(req).await.expect("router should respond");

    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*"),
    );
}

#[tokio::test]
async fn error_bodies_never_carry_internal_detail() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/quiz-result")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"questions":[]}"#))
        .expect("request build should succeed");

    let resp = app().await.oneshot(req).await.expect("router should respond");

    let body = body_json(resp).await;
    let object = body.as_object().expect("error body should be an object");
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(keys, ["error"]);
}
