//! End-to-end tests driving every operation against a mock server.
//!
//! Each test asserts both sides of the contract: the request shape the
//! client puts on the wire (method, path, auth, media type, body) and the
//! envelope it decodes from the server's answer.

use std::net::TcpListener;

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use drip_client::{
    ClientConfig, DripClient, DripError, ErrorCode, ListSubscribersRequest, TagPair, TagsRequest,
    UpdateSubscriber, UpdateSubscribersRequest,
};

const BASIC_AUTH: &str = "Basic dGVzdC1rZXk6"; // base64("test-key:")
const MEDIA_TYPE: &str = "application/vnd.api+json";

fn client_for(server: &MockServer) -> DripClient {
    DripClient::builder()
        .api_key("test-key")
        .account_id("9999999")
        .config(ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        })
        .build()
        .expect("client")
}

#[tokio::test]
async fn list_subscribers_decodes_entities() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/9999999/subscribers"))
        .and(header("Authorization", BASIC_AUTH))
        .and(header("Content-Type", MEDIA_TYPE))
        .and(header(
            "User-Agent",
            concat!("drip-client/", env!("CARGO_PKG_VERSION")),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "subscribers": [{"id": "1", "email": "a@b.com"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let envelope = client
        .list_subscribers(&ListSubscribersRequest::default())
        .await
        .expect("list subscribers");

    assert_eq!(envelope.status_code, 200);
    assert_eq!(envelope.subscribers.len(), 1);
    assert_eq!(envelope.subscribers[0].email.as_deref(), Some("a@b.com"));
    assert!(envelope.errors.is_empty());
}

#[tokio::test]
async fn list_subscribers_sends_filters_in_the_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/9999999/subscribers"))
        .and(body_json(serde_json::json!({
            "status": "active",
            "page": 2,
            "per_page": 50
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "subscribers": [],
            "meta": {"page": 2, "count": 0, "total_pages": 2, "total_count": 51}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = ListSubscribersRequest {
        status: Some("active".to_string()),
        page: Some(2),
        per_page: Some(50),
        ..ListSubscribersRequest::default()
    };
    let envelope = client.list_subscribers(&request).await.expect("list");

    assert!(envelope.subscribers.is_empty());
    assert_eq!(envelope.meta.expect("meta").total_count, Some(51));
}

#[tokio::test]
async fn update_subscribers_posts_only_set_fields() {
    let server = MockServer::start().await;

    // `new_email`, `lifetime_value`, etc. were never set and must not appear
    Mock::given(method("POST"))
        .and(path("/9999999/subscribers"))
        .and(header("Authorization", BASIC_AUTH))
        .and(body_json(serde_json::json!({
            "subscribers": [{"email": "a@b.com", "tags": ["dev", "test"]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "subscribers": [{"id": "1", "email": "a@b.com", "tags": ["dev", "test"]}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = UpdateSubscribersRequest {
        subscribers: vec![UpdateSubscriber {
            email: Some("a@b.com".to_string()),
            tags: Some(vec!["dev".to_string(), "test".to_string()]),
            ..UpdateSubscriber::default()
        }],
    };
    let envelope = client.update_subscribers(&request).await.expect("update");

    assert_eq!(envelope.status_code, 200);
    assert_eq!(envelope.subscribers.len(), 1);
}

#[tokio::test]
async fn fetch_subscriber_hits_the_resource_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/9999999/subscribers/a@b.com"))
        .and(header("Authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "subscribers": [{"id": "1", "email": "a@b.com", "status": "active"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let envelope = client.fetch_subscriber("a@b.com").await.expect("fetch");

    assert_eq!(envelope.status_code, 200);
    assert_eq!(envelope.subscribers[0].status.as_deref(), Some("active"));
}

#[tokio::test]
async fn delete_subscriber_handles_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/9999999/subscribers/a@b.com"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let envelope = client.delete_subscriber("a@b.com").await.expect("delete");

    assert_eq!(envelope.status_code, 204);
    assert!(envelope.errors.is_empty());
}

#[tokio::test]
async fn tag_subscribers_posts_the_batch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/9999999/tags"))
        .and(body_json(serde_json::json!({
            "tags": [{"email": "a@b.com", "tag": "Customer"}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = TagsRequest {
        tags: vec![TagPair {
            email: "a@b.com".to_string(),
            tag: "Customer".to_string(),
        }],
    };
    let envelope = client.tag_subscribers(&request).await.expect("tag");

    assert_eq!(envelope.status_code, 201);
    assert!(envelope.errors.is_empty());
}

#[tokio::test]
async fn remove_subscriber_tag_hits_the_nested_path() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/9999999/subscribers/a@b.com/tags/Customer"))
        .and(header("Authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pair = TagPair {
        email: "a@b.com".to_string(),
        tag: "Customer".to_string(),
    };
    let envelope = client.remove_subscriber_tag(&pair).await.expect("remove");

    assert_eq!(envelope.status_code, 204);
}

#[tokio::test]
async fn coded_errors_decode_as_a_successful_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/9999999/subscribers"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "errors": [
                {"code": "presence_error", "attribute": "email", "message": "Email must be present"},
                {"code": "email_error", "attribute": "email", "message": "Email is invalid"}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let envelope = client
        .update_subscribers(&UpdateSubscribersRequest::default())
        .await
        .expect("decode should succeed");

    assert_eq!(envelope.status_code, 422);
    assert!(envelope.subscribers.is_empty());
    assert_eq!(envelope.errors.len(), 2);
    assert_eq!(envelope.errors[0].code, ErrorCode::PresenceError);
    assert_eq!(envelope.errors[1].code, ErrorCode::EmailError);
}

#[tokio::test]
async fn html_error_pages_surface_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/9999999/subscribers"))
        .respond_with(
            ResponseTemplate::new(500).set_body_raw("<html>Internal Server Error</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .list_subscribers(&ListSubscribersRequest::default())
        .await;

    match result {
        Err(DripError::UnexpectedResponse { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "<html>Internal Server Error</html>");
        }
        other => panic!("expected UnexpectedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_failures_yield_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener); // release the port so the request fails with ECONNREFUSED

    let client = DripClient::builder()
        .api_key("test-key")
        .account_id("9999999")
        .config(ClientConfig {
            base_url: format!("http://{addr}"),
            ..ClientConfig::default()
        })
        .build()
        .expect("client");

    let result = client.fetch_subscriber("a@b.com").await;
    assert!(matches!(result, Err(DripError::Transport(_))));
}
