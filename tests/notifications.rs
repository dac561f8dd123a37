//! Contract tests for notification templates and submission checks.

mod common;

use courier_sdk::notifications::{BaseCheck, BlockType, CheckStatus};
use mockito::Matcher;

#[tokio::test]
async fn list_passes_notes_flag() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/notifications")
        .match_query(Matcher::UrlEncoded("notes".into(), "true".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "paging": {"cursor": null, "more": false},
                "results": [
                    {
                        "id": "notification-1",
                        "title": "Welcome",
                        "routing": {"method": "single", "channels": ["email"]}
                    }
                ]
            }"#,
        )
        .create_async()
        .await;

    let client = common::client_for(&server);
    let resp = client
        .notifications()
        .list(None, Some(true))
        .await
        .expect("list succeeds");

    assert_eq!(resp.results[0].id, "notification-1");
    assert_eq!(
        resp.results[0].routing.as_ref().map(|r| r.channels.clone()),
        Some(vec!["email".to_string()])
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn content_deserializes_blocks_and_channels() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/notifications/notification-1/content")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "blocks": [
                    {"id": "block_1", "type": "text", "content": "Hi {name}"},
                    {"id": "block_2", "type": "list", "content": {"parent": "{items}", "children": "{child}"}}
                ],
                "channels": [
                    {"id": "channel_1", "type": "email", "content": {"subject": "Welcome"}}
                ],
                "checksum": "abc123"
            }"#,
        )
        .create_async()
        .await;

    let client = common::client_for(&server);
    let content = client
        .notifications()
        .get_content("notification-1")
        .await
        .expect("get_content succeeds");

    let blocks = content.blocks.expect("blocks present");
    assert_eq!(blocks[0].block_type, BlockType::Text);
    assert_eq!(blocks[1].block_type, BlockType::List);
    assert_eq!(content.checksum.as_deref(), Some("abc123"));
    mock.assert_async().await;
}

#[tokio::test]
async fn draft_content_uses_the_draft_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/notifications/notification-1/draft/content")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"checksum": "draft-1"}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let content = client
        .notifications()
        .get_draft_content("notification-1")
        .await
        .expect("get_draft_content succeeds");

    assert_eq!(content.checksum.as_deref(), Some("draft-1"));
    mock.assert_async().await;
}

#[tokio::test]
async fn replace_checks_puts_the_caller_view() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/notifications/notification-1/submission-1/checks")
        .match_body(Matcher::Json(serde_json::json!({
            "checks": [{"id": "check-1", "status": "RESOLVED", "type": "custom"}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "checks": [
                    {"id": "check-1", "status": "RESOLVED", "type": "custom", "updated": 1662050454}
                ]
            }"#,
        )
        .create_async()
        .await;

    let client = common::client_for(&server);
    let resp = client
        .notifications()
        .replace_submission_checks(
            "notification-1",
            "submission-1",
            &[BaseCheck::custom("check-1", CheckStatus::Resolved)],
        )
        .await
        .expect("replace_submission_checks succeeds");

    assert_eq!(resp.checks[0].status, CheckStatus::Resolved);
    assert_eq!(resp.checks[0].updated, 1662050454);
    mock.assert_async().await;
}

#[tokio::test]
async fn cancel_submission_deletes_its_checks() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/notifications/notification-1/submission-1/checks")
        .with_status(204)
        .create_async()
        .await;

    let client = common::client_for(&server);
    client
        .notifications()
        .cancel_submission("notification-1", "submission-1")
        .await
        .expect("cancel_submission succeeds");

    mock.assert_async().await;
}
