//! Contract tests for tenants and tenant default preferences.

mod common;

use courier_sdk::tenants::{PutDefaultPreferencesParams, PutTenantParams};
use courier_sdk::types::preference::{ChannelClassification, PreferenceStatus};
use mockito::Matcher;

#[tokio::test]
async fn put_creates_the_tenant() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/tenants/tenant-1")
        .match_body(Matcher::Json(serde_json::json!({
            "name": "Acme",
            "brand_id": "brand-1"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "tenant-1", "name": "Acme", "brand_id": "brand-1"}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let params = PutTenantParams::new("Acme").with_brand_id("brand-1");
    let tenant = client
        .tenants()
        .put("tenant-1", &params)
        .await
        .expect("put succeeds");

    assert_eq!(tenant.id, "tenant-1");
    assert_eq!(tenant.brand_id.as_deref(), Some("brand-1"));
    mock.assert_async().await;
}

#[tokio::test]
async fn list_filters_by_parent_tenant() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/tenants")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "20".into()),
            Matcher::UrlEncoded("parent_tenant_id".into(), "tenant-root".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "items": [{"id": "tenant-1", "name": "Acme", "parent_tenant_id": "tenant-root"}],
                "has_more": false,
                "url": "/tenants",
                "type": "list"
            }"#,
        )
        .create_async()
        .await;

    let client = common::client_for(&server);
    let resp = client
        .tenants()
        .list(Some(20), None, Some("tenant-root"))
        .await
        .expect("list succeeds");

    assert_eq!(resp.items.len(), 1);
    assert_eq!(
        resp.items[0].parent_tenant_id.as_deref(),
        Some("tenant-root")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn tenant_users_page_deserializes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/tenants/tenant-1/users")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "items": [{"tenant_id": "tenant-1", "user_id": "u-1"}],
                "has_more": false,
                "url": "/tenants/tenant-1/users",
                "type": "list"
            }"#,
        )
        .create_async()
        .await;

    let client = common::client_for(&server);
    let resp = client
        .tenants()
        .get_users("tenant-1", None, None)
        .await
        .expect("get_users succeeds");

    assert_eq!(resp.items[0].user_id.as_deref(), Some("u-1"));
    mock.assert_async().await;
}

#[tokio::test]
async fn default_preferences_put_targets_the_topic_item() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/tenants/tenant-1/default_preferences/items/topic-1")
        .match_body(Matcher::Json(serde_json::json!({
            "status": "OPTED_IN",
            "has_custom_routing": true,
            "custom_routing": ["inbox", "email"]
        })))
        .with_status(204)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let params = PutDefaultPreferencesParams {
        status: PreferenceStatus::OptedIn,
        has_custom_routing: Some(true),
        custom_routing: Some(vec![
            ChannelClassification::Inbox,
            ChannelClassification::Email,
        ]),
    };
    client
        .tenants()
        .put_default_preferences("tenant-1", "topic-1", &params)
        .await
        .expect("put_default_preferences succeeds");

    mock.assert_async().await;
}

#[tokio::test]
async fn default_preferences_delete_targets_the_topic_item() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/tenants/tenant-1/default_preferences/items/topic-1")
        .with_status(204)
        .create_async()
        .await;

    let client = common::client_for(&server);
    client
        .tenants()
        .delete_default_preferences("tenant-1", "topic-1")
        .await
        .expect("delete_default_preferences succeeds");

    mock.assert_async().await;
}
