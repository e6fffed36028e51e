mod common;

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{bearer_header, generate_unique_email, test_state, test_state_with};
use serde_json::{Value, json};
use tower::ServiceExt;
use wardpass::middleware::role::UserRole;
use wardpass::router::init_router;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn issue_request(role: UserRole, email: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/passes")
        .header("authorization", bearer_header(role, email))
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn scan_request(role: UserRole, email: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/passes/scan")
        .header("authorization", bearer_header(role, email))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "token": token })).unwrap(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_issue_pass_as_admin() {
    let app = init_router(test_state());

    let response = app
        .oneshot(issue_request(
            UserRole::Admin,
            &generate_unique_email(),
            json!({ "child_id": 3, "school_id": 8, "status": "verified" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["token"], "child-3-8-verified");
}

#[tokio::test]
async fn test_issue_pass_forbidden_for_teacher() {
    let app = init_router(test_state());

    let response = app
        .oneshot(issue_request(
            UserRole::Teacher,
            &generate_unique_email(),
            json!({ "child_id": 3, "school_id": 8, "status": "pending" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_issue_pass_forbidden_for_guardian() {
    let app = init_router(test_state());

    let response = app
        .oneshot(issue_request(
            UserRole::Guardian,
            &generate_unique_email(),
            json!({ "child_id": 3, "school_id": 8, "status": "pending" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_issue_pass_rejects_zero_ids() {
    let app = init_router(test_state());

    let response = app
        .oneshot(issue_request(
            UserRole::Admin,
            &generate_unique_email(),
            json!({ "child_id": 0, "school_id": 8, "status": "pending" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_scan_pass_as_teacher() {
    let app = init_router(test_state());

    let response = app
        .oneshot(scan_request(
            UserRole::Teacher,
            &generate_unique_email(),
            "child-3-8-verified",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["child_id"], 3);
    assert_eq!(body["school_id"], 8);
    assert_eq!(body["status"], "verified");
}

#[tokio::test]
async fn test_scan_pass_as_admin() {
    let app = init_router(test_state());

    let response = app
        .oneshot(scan_request(
            UserRole::Admin,
            &generate_unique_email(),
            "child-15-2-pending",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_scan_pass_forbidden_for_guardian() {
    let app = init_router(test_state());

    let response = app
        .oneshot(scan_request(
            UserRole::Guardian,
            &generate_unique_email(),
            "child-3-8-verified",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_scan_pass_requires_auth() {
    let app = init_router(test_state());

    let request = Request::builder()
        .method("POST")
        .uri("/api/passes/scan")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "token": "child-3-8-verified" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_scan_pass_malformed_tokens() {
    let app = init_router(test_state());

    // (token, expected error fragment)
    let cases = [
        ("child-3-verified", "child id, a school id, and a status"),
        ("child-3-8-unknown", "Unknown pass status"),
        ("child--8-verified", "child id must be a positive integer"),
        ("CHILD-3-8-verified", "must start with"),
    ];

    for (token, fragment) in cases {
        let response = app
            .clone()
            .oneshot(scan_request(
                UserRole::Teacher,
                &generate_unique_email(),
                token,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "token: {token}");

        let body = body_json(response).await;
        assert!(
            body["error"].as_str().unwrap().contains(fragment),
            "token: {token}, error: {}",
            body["error"]
        );
    }
}

#[tokio::test]
async fn test_scan_pass_throttled_within_window() {
    let state = test_state_with(600, Duration::from_secs(60), Duration::from_secs(60));
    let app = init_router(state);
    let email = generate_unique_email();

    let first = app
        .clone()
        .oneshot(scan_request(UserRole::Teacher, &email, "child-3-8-verified"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(scan_request(UserRole::Teacher, &email, "child-3-8-verified"))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_issue_then_scan_round_trip() {
    let app = init_router(test_state());

    let response = app
        .clone()
        .oneshot(issue_request(
            UserRole::Admin,
            &generate_unique_email(),
            json!({ "child_id": 12, "school_id": 34, "status": "pending" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let token = body_json(response).await["token"].as_str().unwrap().to_string();

    let response = app
        .oneshot(scan_request(
            UserRole::Teacher,
            &generate_unique_email(),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["child_id"], 12);
    assert_eq!(body["school_id"], 34);
    assert_eq!(body["status"], "pending");
}
