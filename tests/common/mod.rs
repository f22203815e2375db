//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use halaqa_chat::client::Config;
use halaqa_chat::shared::{AppConfig, LiveEvent, UserIdentity};
use serde_json::{json, Value};

pub const TEST_TOKEN: &str = "test-jwt";

static TRACING: std::sync::Once = std::sync::Once::new();

/// Route library logs through the test writer; honors `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn local_user() -> UserIdentity {
    UserIdentity::new("u1", "Ahmad", "Hassan")
}

pub fn peer(id: &str, first: &str, last: &str) -> UserIdentity {
    UserIdentity::new(id, first, last)
}

/// Config pointing at a mock server, with a bearer token installed.
pub fn config_for(server_url: &str) -> Config {
    let mut config =
        Config::with_builder(AppConfig::builder().server_url(server_url.to_string()))
            .expect("mock server url is valid");
    config.set_token(Some(TEST_TOKEN.to_string()));
    config
}

/// Conversation summary in the backend's wire shape.
pub fn summary_json(
    conversation_id: &str,
    peer_id: &str,
    first: &str,
    last_message: Option<(&str, &str)>,
    unread: u32,
) -> Value {
    let mut summary = json!({
        "_id": conversation_id,
        "peer": {"_id": peer_id, "firstName": first, "lastName": "Test"},
        "unreadCount": unread,
    });
    if let Some((text, created_at)) = last_message {
        summary["lastMessage"] = json!({
            "text": text,
            "createdAt": created_at,
            "senderId": peer_id,
        });
    }
    summary
}

/// Thread message with a populated sender, as the REST thread fetch returns.
pub fn thread_message_json(id: &str, sender_id: &str, text: &str, created_at: &str) -> Value {
    json!({
        "_id": id,
        "senderId": {"_id": sender_id, "firstName": "Sender", "lastName": sender_id},
        "text": text,
        "createdAt": created_at,
    })
}

/// Send-endpoint response: sender as a bare id.
pub fn send_response_json(id: &str, sender_id: &str, receiver_id: &str, text: &str) -> Value {
    json!({
        "_id": id,
        "senderId": sender_id,
        "receiverId": receiver_id,
        "message": text,
        "createdAt": "2026-03-01T10:00:00Z",
    })
}

/// Parse a `newMessage` socket event from the given sender.
pub fn new_message_event(id: &str, sender: &UserIdentity, text: &str, created_at: &str) -> LiveEvent {
    let frame = json!({
        "event": "newMessage",
        "data": {
            "_id": id,
            "senderId": {
                "_id": sender.id,
                "firstName": sender.first_name,
                "lastName": sender.last_name,
            },
            "text": text,
            "createdAt": created_at,
        }
    });
    serde_json::from_value(frame).expect("event fixture parses")
}

/// A `newMessage` echo of the local user's own send (bare sender id).
pub fn self_echo_event(id: &str, sender_id: &str, receiver_id: &str, text: &str) -> LiveEvent {
    let frame = json!({
        "event": "newMessage",
        "data": {
            "_id": id,
            "senderId": sender_id,
            "receiverId": receiver_id,
            "text": text,
            "createdAt": "2026-03-01T10:00:00Z",
        }
    });
    serde_json::from_value(frame).expect("event fixture parses")
}
