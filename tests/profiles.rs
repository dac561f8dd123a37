//! Contract tests for profile endpoints.

mod common;

use courier_sdk::profiles::SubscribeToListsEntry;
use courier_sdk::types::patch::PatchOperation;
use mockito::Matcher;

#[tokio::test]
async fn get_returns_untyped_profile() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/profiles/u-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"profile": {"email": "ada@example.com", "favorite_color": "green"}}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let resp = client.profiles().get("u-1").await.expect("get succeeds");

    assert_eq!(resp.profile["email"], "ada@example.com");
    assert_eq!(resp.profile["favorite_color"], "green");
    mock.assert_async().await;
}

#[tokio::test]
async fn create_wraps_fields_under_profile() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/profiles/u-1")
        .match_body(Matcher::Json(serde_json::json!({
            "profile": {"email": "ada@example.com"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "SUCCESS"}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let resp = client
        .profiles()
        .create("u-1", &serde_json::json!({"email": "ada@example.com"}))
        .await
        .expect("create succeeds");

    assert_eq!(resp.status, "SUCCESS");
    mock.assert_async().await;
}

#[tokio::test]
async fn merge_patch_sends_operation_list() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/profiles/u-1")
        .match_body(Matcher::Json(serde_json::json!({
            "patch": [
                {"op": "replace", "path": "/email", "value": "new@example.com"},
                {"op": "remove", "path": "/phone_number"}
            ]
        })))
        .with_status(204)
        .create_async()
        .await;

    let client = common::client_for(&server);
    client
        .profiles()
        .merge_patch(
            "u-1",
            &[
                PatchOperation::replace("/email", serde_json::json!("new@example.com")),
                PatchOperation::remove("/phone_number"),
            ],
        )
        .await
        .expect("merge_patch succeeds");

    mock.assert_async().await;
}

#[tokio::test]
async fn subscribe_to_lists_uses_camel_case_list_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/profiles/u-1/lists")
        .match_body(Matcher::Json(serde_json::json!({
            "lists": [{"listId": "example.list.id"}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "SUCCESS"}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let resp = client
        .profiles()
        .subscribe_to_lists("u-1", &[SubscribeToListsEntry::new("example.list.id")])
        .await
        .expect("subscribe_to_lists succeeds");

    assert_eq!(resp.status, "SUCCESS");
    mock.assert_async().await;
}

#[tokio::test]
async fn list_subscriptions_page_deserializes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/profiles/u-1/lists")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "paging": {"cursor": null, "more": false},
                "results": [{"id": "example.list.id", "name": "Example List"}]
            }"#,
        )
        .create_async()
        .await;

    let client = common::client_for(&server);
    let resp = client
        .profiles()
        .get_list_subscriptions("u-1", None)
        .await
        .expect("get_list_subscriptions succeeds");

    assert_eq!(resp.results[0].name, "Example List");
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_list_subscriptions_returns_the_status() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/profiles/u-1/lists")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "SUCCESS"}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let resp = client
        .profiles()
        .delete_list_subscriptions("u-1")
        .await
        .expect("delete_list_subscriptions succeeds");

    assert_eq!(resp.status, "SUCCESS");
    mock.assert_async().await;
}

#[tokio::test]
async fn ids_with_reserved_characters_stay_in_their_segment() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/profiles/team%2Flead")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"profile": {}}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    client
        .profiles()
        .get("team/lead")
        .await
        .expect("get succeeds");

    mock.assert_async().await;
}

#[tokio::test]
async fn delete_removes_the_profile() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/profiles/u-1")
        .with_status(204)
        .create_async()
        .await;

    let client = common::client_for(&server);
    client.profiles().delete("u-1").await.expect("delete succeeds");

    mock.assert_async().await;
}
