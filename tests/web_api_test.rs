//! Web API Tests
//!
//! Integration tests for the JSON binding of every operation.

use axum::http::StatusCode;
use axum_test::TestServer;
use postbox::hash_password;
use postbox::service::ChatService;
use postbox::web::create_router;
use postbox::web::handlers::AppState;
use serde_json::{json, Value};
use std::sync::Arc;

/// Create a test server over an empty directory.
fn create_test_server() -> TestServer {
    let app_state = Arc::new(AppState::new(ChatService::in_memory()));
    let router = create_router(app_state);
    TestServer::new(router).expect("Failed to create test server")
}

/// Helper to register a user with a hashed password.
async fn register(server: &TestServer, username: &str, password: &str) -> Value {
    server
        .post("/api/create_account")
        .json(&json!({
            "username": username,
            "password": hash_password(password)
        }))
        .await
        .json::<Value>()
}

async fn send(server: &TestServer, sender: &str, recipient: &str, body: &str) {
    server
        .post("/api/send_message")
        .json(&json!({"sender": sender, "recipient": recipient, "body": body}))
        .await
        .assert_status_ok();
}

// ============================================================================
// Account Tests
// ============================================================================

#[tokio::test]
async fn test_create_account() {
    let server = create_test_server();

    let body = register(&server, "alice", "secret123").await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Account 'alice' created successfully");
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_create_account_conflict() {
    let server = create_test_server();
    register(&server, "bob", "secret123").await;

    let response = server
        .post("/api/create_account")
        .json(&json!({"username": "bob", "password": hash_password("other")}))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_create_account_missing_fields() {
    let server = create_test_server();

    let response = server
        .post("/api/create_account")
        .json(&json!({"username": "carol"}))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_login() {
    let server = create_test_server();
    register(&server, "charlie", "p@ss").await;

    let response = server
        .post("/api/login")
        .json(&json!({"username": "charlie", "password": hash_password("p@ss")}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["unread_count"], 0);

    let response = server
        .post("/api/login")
        .json(&json!({"username": "charlie", "password": hash_password("wrong")}))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["message"], "Incorrect password");

    let response = server
        .post("/api/login")
        .json(&json!({"username": "nobody", "password": hash_password("p@ss")}))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_accounts() {
    let server = create_test_server();
    for user in ["alice", "alex", "bob"] {
        register(&server, user, "pw").await;
    }

    let response = server
        .post("/api/list_accounts")
        .json(&json!({"pattern": "AL"}))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["accounts"],
        json!(["alex", "alice"])
    );

    let response = server.post("/api/list_accounts").json(&json!({})).await;
    assert_eq!(
        response.json::<Value>()["accounts"],
        json!(["alex", "alice", "bob"])
    );

    let response = server
        .post("/api/list_accounts")
        .json(&json!({"pattern": "*"}))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_account() {
    let server = create_test_server();
    register(&server, "alice", "pw").await;

    let response = server
        .post("/api/delete_account")
        .json(&json!({"username": "alice"}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], "Account 'alice' deleted.");

    let response = server
        .post("/api/delete_account")
        .json(&json!({"username": "alice"}))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_send_message_body_handling() {
    let server = create_test_server();
    register(&server, "alice", "pw").await;
    register(&server, "bob", "pw").await;

    // Empty body is a valid message
    send(&server, "alice", "bob", "").await;

    // Missing body is not
    let response = server
        .post("/api/send_message")
        .json(&json!({"sender": "alice", "recipient": "bob"}))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Missing fields");

    let response = server
        .post("/api/login")
        .json(&json!({"username": "bob", "password": hash_password("pw")}))
        .await;
    assert_eq!(response.json::<Value>()["unread_count"], 1);
}

#[tokio::test]
async fn test_send_message_unknown_parties() {
    let server = create_test_server();
    register(&server, "bob", "pw").await;

    let response = server
        .post("/api/send_message")
        .json(&json!({"sender": "alice", "to": "bob", "content": "Hello?"}))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["message"],
        "Sender 'alice' does not exist"
    );
}

#[tokio::test]
async fn test_message_lifecycle() {
    let server = create_test_server();
    register(&server, "alice", "pw").await;
    register(&server, "bob", "pw").await;
    register(&server, "carol", "pw").await;

    send(&server, "bob", "alice", "Hello").await;
    send(&server, "carol", "alice", "Hi").await;

    let response = server
        .post("/api/read_new_messages")
        .json(&json!({"username": "alice", "count": 1}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0]
        .as_str()
        .unwrap()
        .ends_with(" - From: bob - Hello"));

    let body: Value = server
        .post("/api/list_messages")
        .json(&json!({"username": "alice"}))
        .await
        .json();
    assert_eq!(body["messages"].as_array().unwrap().len(), 1);

    let body: Value = server
        .post("/api/delete_messages")
        .json(&json!({"username": "alice", "message_ids": [1, 7]}))
        .await
        .json();
    assert_eq!(body["message"], "Deleted 1 messages.");

    // The remaining message is still unread and now sits at position 1
    let body: Value = server
        .post("/api/read_new_messages")
        .json(&json!({"username": "alice", "count": 0}))
        .await
        .json();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].as_str().unwrap().ends_with(" - From: carol - Hi"));

    let body: Value = server
        .post("/api/delete_messages")
        .json(&json!({"username": "alice", "message_ids": [-1]}))
        .await
        .json();
    assert_eq!(body["message"], "All messages deleted");

    let body: Value = server
        .post("/api/list_messages")
        .json(&json!({"username": "alice"}))
        .await
        .json();
    assert_eq!(body["messages"], json!([]));
}

#[tokio::test]
async fn test_list_messages_unknown_user() {
    let server = create_test_server();

    let response = server
        .post("/api/list_messages")
        .json(&json!({"username": "nonexistent"}))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["messages"], json!([]));
}

#[tokio::test]
async fn test_delete_messages_missing_ids() {
    let server = create_test_server();
    register(&server, "alice", "pw").await;

    let response = server
        .post("/api/delete_messages")
        .json(&json!({"username": "alice", "message_ids": []}))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_body() {
    let server = create_test_server();

    let response = server
        .post("/api/login")
        .content_type("application/json")
        .bytes("{\"username\": \"alice\",".into())
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "INVALID_INPUT");
    assert!(body["message"].as_str().unwrap().starts_with("Invalid JSON"));

    let response = server
        .post("/api/send_message")
        .json(&json!({"sender": "alice", "recipient": "bob", "body": 42}))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "INVALID_INPUT");
}
