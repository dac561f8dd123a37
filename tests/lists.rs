//! Contract tests for lists and list subscriptions.

mod common;

use courier_sdk::lists::{ListPutParams, PutSubscriptionsRecipient};
use mockito::Matcher;

#[tokio::test]
async fn list_passes_pattern_filter() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/lists")
        .match_query(Matcher::UrlEncoded("pattern".into(), "example.*".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "paging": {"cursor": null, "more": false},
                "items": [{"id": "example.list.id", "name": "Example List"}]
            }"#,
        )
        .create_async()
        .await;

    let client = common::client_for(&server);
    let resp = client
        .lists()
        .list(Some("example.*"), None)
        .await
        .expect("list succeeds");

    assert_eq!(resp.items[0].id, "example.list.id");
    mock.assert_async().await;
}

#[tokio::test]
async fn update_puts_the_new_name() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/lists/example.list.id")
        .match_body(Matcher::Json(serde_json::json!({"name": "Renamed"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "example.list.id", "name": "Renamed"}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let list = client
        .lists()
        .update(
            "example.list.id",
            &ListPutParams {
                name: "Renamed".to_string(),
            },
        )
        .await
        .expect("update succeeds");

    assert_eq!(list.name, "Renamed");
    mock.assert_async().await;
}

#[tokio::test]
async fn restore_puts_without_a_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/lists/example.list.id/restore")
        .with_status(204)
        .create_async()
        .await;

    let client = common::client_for(&server);
    client
        .lists()
        .restore("example.list.id")
        .await
        .expect("restore succeeds");

    mock.assert_async().await;
}

#[tokio::test]
async fn update_subscribers_wraps_recipients() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/lists/example.list.id/subscriptions")
        .match_body(Matcher::Json(serde_json::json!({
            "recipients": [
                {"recipientId": "u-1"},
                {"recipientId": "u-2"}
            ]
        })))
        .with_status(204)
        .create_async()
        .await;

    let client = common::client_for(&server);
    client
        .lists()
        .update_subscribers(
            "example.list.id",
            &[
                PutSubscriptionsRecipient::new("u-1"),
                PutSubscriptionsRecipient::new("u-2"),
            ],
        )
        .await
        .expect("update_subscribers succeeds");

    mock.assert_async().await;
}

#[tokio::test]
async fn subscribe_single_user_without_preferences() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/lists/example.list.id/subscriptions/u-1")
        .match_body(Matcher::Json(serde_json::json!({})))
        .with_status(204)
        .create_async()
        .await;

    let client = common::client_for(&server);
    client
        .lists()
        .subscribe("example.list.id", "u-1", None)
        .await
        .expect("subscribe succeeds");

    mock.assert_async().await;
}

#[tokio::test]
async fn unsubscribe_deletes_the_subscription() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/lists/example.list.id/subscriptions/u-1")
        .with_status(204)
        .create_async()
        .await;

    let client = common::client_for(&server);
    client
        .lists()
        .unsubscribe("example.list.id", "u-1")
        .await
        .expect("unsubscribe succeeds");

    mock.assert_async().await;
}

#[tokio::test]
async fn subscribers_page_deserializes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/lists/example.list.id/subscriptions")
        .match_query(Matcher::UrlEncoded("cursor".into(), "abc".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "paging": {"cursor": "def", "more": true},
                "items": [{"recipientId": "u-1", "created": "2020-06-10T18:41:29.093Z"}]
            }"#,
        )
        .create_async()
        .await;

    let client = common::client_for(&server);
    let resp = client
        .lists()
        .get_subscribers("example.list.id", Some("abc"))
        .await
        .expect("get_subscribers succeeds");

    assert_eq!(resp.items[0].recipient_id, "u-1");
    assert!(resp.paging.more);
    assert_eq!(resp.paging.cursor.as_deref(), Some("def"));
    mock.assert_async().await;
}
