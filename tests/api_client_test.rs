//! REST client tests against a mock backend.

mod common;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use halaqa_chat::client::ChatApiClient;
use halaqa_chat::shared::ChatError;

use common::*;

#[tokio::test]
async fn test_get_conversations_parses_summaries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat/conversations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            summary_json("c1", "p1", "Fatima", Some(("salam", "2026-03-01T10:30:00Z")), 2),
            summary_json("c2", "p2", "Yusuf", None, 0),
        ])))
        .mount(&server)
        .await;

    let api = ChatApiClient::new(config_for(&server.uri()));
    let summaries = api.get_conversations().await.unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].conversation_id, "c1");
    assert_eq!(summaries[0].peer.first_name, "Fatima");
    assert_eq!(summaries[0].unread_count, 2);
    assert!(summaries[1].last_message.is_none());
}

#[tokio::test]
async fn test_requests_carry_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat/conversations"))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = ChatApiClient::new(config_for(&server.uri()));
    api.get_conversations().await.unwrap();
}

#[tokio::test]
async fn test_get_thread_parses_messages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            thread_message_json("m1", "p1", "salam", "2026-03-01T10:00:00Z"),
            thread_message_json("m2", "u1", "wa alaikum salam", "2026-03-01T10:01:00Z"),
        ])))
        .mount(&server)
        .await;

    let api = ChatApiClient::new(config_for(&server.uri()));
    let messages = api.get_thread("p1").await.unwrap();

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender_id.id(), "p1");
    assert_eq!(messages[1].sender_id.id(), "u1");
}

#[tokio::test]
async fn test_send_message_posts_body_and_parses_bare_sender() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/send/p1"))
        .and(body_json(json!({"message": "how is the recitation going?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(send_response_json(
            "m9",
            "u1",
            "p1",
            "how is the recitation going?",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let api = ChatApiClient::new(config_for(&server.uri()));
    let created = api
        .send_message("p1", "how is the recitation going?")
        .await
        .unwrap();

    assert_eq!(created.id.as_deref(), Some("m9"));
    assert_eq!(created.sender_id.id(), "u1");
    assert_eq!(created.text, "how is the recitation going?");
}

#[tokio::test]
async fn test_mark_read_hits_the_read_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/p1/read"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = ChatApiClient::new(config_for(&server.uri()));
    api.mark_read("p1").await.unwrap();
}

#[tokio::test]
async fn test_api_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat/conversations"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&server)
        .await;

    let api = ChatApiClient::new(config_for(&server.uri()));
    let err = api.get_conversations().await.unwrap_err();

    assert_matches!(err, ChatError::Api { status: 500, ref body } if body == "database unavailable");
}

#[tokio::test]
async fn test_malformed_payload_is_a_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "a list"})))
        .mount(&server)
        .await;

    let api = ChatApiClient::new(config_for(&server.uri()));
    let err = api.get_thread("p1").await.unwrap_err();

    assert_matches!(err, ChatError::Serialization { .. });
}
