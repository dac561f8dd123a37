//! How non-2xx responses and malformed bodies surface to callers.

mod common;

use courier_sdk::{Error, Message, TemplateMessage};

async fn send_against(server: &mockito::ServerGuard) -> Result<(), Error> {
    let client = common::client_for(server);
    client
        .send()
        .message(Message::Template(TemplateMessage::new("T1")))
        .await
        .map(|_| ())
}

#[tokio::test]
async fn unauthorized_is_classified_as_authentication() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/send")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Unauthorized", "type": "authorization_error"}"#)
        .create_async()
        .await;

    let err = send_against(&server).await.expect_err("should fail");
    assert!(err.is_authentication());
    assert!(!err.retryable());
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn rate_limit_is_retryable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/send")
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Too Many Requests", "type": "rate_limit_error"}"#)
        .create_async()
        .await;

    let err = send_against(&server).await.expect_err("should fail");
    assert!(err.is_rate_limited());
    assert!(err.retryable());
}

#[tokio::test]
async fn server_error_is_retryable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/send")
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let err = send_against(&server).await.expect_err("should fail");
    assert!(err.is_server_error());
    assert!(err.retryable());
    // Non-JSON bodies still surface, just without a parsed code.
    match err {
        Error::Api { status, code, message } => {
            assert_eq!(status, 503);
            assert!(code.is_none());
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_serialization_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/send")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"requestId": 42"#)
        .create_async()
        .await;

    let err = send_against(&server).await.expect_err("should fail");
    assert!(matches!(err, Error::Serialization(_)));
}

#[tokio::test]
async fn validation_errors_carry_the_courier_code() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/send")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "message.to is required", "type": "invalid_request_error"}"#)
        .create_async()
        .await;

    let err = send_against(&server).await.expect_err("should fail");
    match err {
        Error::Api { status, code, message } => {
            assert_eq!(status, 400);
            assert_eq!(code.as_deref(), Some("invalid_request_error"));
            assert!(message.contains("message.to"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
