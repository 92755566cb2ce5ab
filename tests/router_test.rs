use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use sqlx::postgres::PgPoolOptions;
use tokio_test::assert_ok;
use tower::ServiceExt;
use youth_job_portal::{routes, AppState};

// Every request here is rejected or answered before the pool is touched.
fn app() -> Router {
    let pool = assert_ok!(PgPoolOptions::new().connect_lazy("postgres://portal@localhost/unused"));
    routes::router(AppState::new(pool))
}

async fn call(method: Method, uri: &str, body: Option<&str>) -> (StatusCode, JsonValue) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = call(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn preflight_is_answered_with_allow_all_cors() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api?resource=jobs")
        .header(header::ORIGIN, "https://portal.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    for verb in ["GET", "POST", "PUT", "DELETE"] {
        assert!(methods.contains(verb), "{} missing from {}", verb, methods);
    }
    let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed.contains("content-type"));
    assert!(allowed.contains("x-requested-with"));
}

#[tokio::test]
async fn regular_responses_carry_allow_origin() {
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://portal.example")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn unknown_resource_is_not_found() {
    let (status, body) = call(Method::GET, "/api?resource=widgets", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Resource not found: widgets");

    let (status, _) = call(Method::GET, "/api/widgets", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unsupported_verbs_are_rejected() {
    for (method, uri) in [
        (Method::PATCH, "/api/users"),
        (Method::DELETE, "/api?resource=users"),
        (Method::GET, "/api/login"),
        (Method::PUT, "/api/interviews"),
        (Method::DELETE, "/api/responses"),
    ] {
        let (status, body) = call(method.clone(), uri, None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, uri);
        assert_eq!(body["error"], "Method not allowed");
    }
}

#[tokio::test]
async fn registration_requires_a_valid_email() {
    let (status, body) = call(
        Method::POST,
        "/api/users",
        Some(r#"{"email":"not-an-email","password":"secret","name":"Ann"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("email"));

    let (status, _) = call(Method::POST, "/api/users", Some(r#"{"email":"ann@example.com"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn job_creation_requires_title_company_location() {
    let (status, body) = call(Method::POST, "/api/jobs", Some(r#"{"company":"Coffee House"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("title"));
    assert!(message.contains("location"));
}

#[tokio::test]
async fn whitespace_only_job_fields_are_rejected() {
    let (status, body) = call(
        Method::POST,
        "/api/jobs",
        Some(r#"{"title":"   ","company":"   ","location":" "}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("title is required"));
    assert!(message.contains("company is required"));
    assert!(message.contains("location is required"));
}

#[tokio::test]
async fn blank_application_status_is_rejected() {
    let (status, body) = call(
        Method::PUT,
        "/api/applications",
        Some(r#"{"id":"2cd84131-6e83-4c98-91ba-f9b9a5f0a06c","status":"  "}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("status is required"));
}

#[tokio::test]
async fn job_update_requires_an_id() {
    let (status, body) = call(
        Method::PUT,
        "/api/jobs",
        Some(r#"{"title":"Courier","company":"Delivery","location":"Center"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required field: id");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let (status, body) = call(Method::POST, "/api/applications", Some("{\"job_id\": ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn messages_need_a_pair_or_a_user() {
    let (status, _) = call(Method::GET, "/api/messages", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call(Method::GET, "/api/messages?user_id=nope", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid user_id: expected a UUID");
}

#[tokio::test]
async fn login_requires_both_fields() {
    let (status, body) = call(Method::POST, "/api/login", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email and password are required");
}

#[tokio::test]
async fn delete_needs_a_well_formed_id() {
    let (status, body) = call(Method::DELETE, "/api/interviews", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required field: id");

    let (status, _) = call(Method::DELETE, "/api/interviews?id=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(Method::DELETE, "/api/messages", Some(r#"{"id":"17"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn interview_date_must_parse() {
    let body = json!({
        "userId": "7d1f0c1e-9f44-4a57-9a8e-8e4f0b9b1c11",
        "jobId": "14",
        "date": "next tuesday"
    })
    .to_string();
    let (status, body) = call(Method::POST, "/api/interviews", Some(&body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid interview date: next tuesday");
}
