//! Live Event Wire Protocol
//!
//! Events delivered over the chat socket. The gateway frames each event as a
//! JSON object `{"event": <name>, "data": <payload>}`; the four event names
//! are `newMessage`, `groupMessage`, `getOnlineUsers` and `notification`.

use serde::{Deserialize, Serialize};

use super::message::ChatMessage;

/// An event received from the live chat stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data")]
pub enum LiveEvent {
    /// A direct message; `senderId` arrives as a populated identity object
    #[serde(rename = "newMessage")]
    NewMessage(ChatMessage),
    /// A message addressed to a group conversation
    #[serde(rename = "groupMessage", rename_all = "camelCase")]
    GroupMessage {
        message: ChatMessage,
        group_id: String,
    },
    /// Wholesale snapshot of the currently online user ids
    #[serde(rename = "getOnlineUsers")]
    OnlineUsers(Vec<String>),
    /// Coarse notification; only `type == "chat"` affects unread bookkeeping
    #[serde(rename = "notification")]
    Notification(NotificationPayload),
}

/// Payload of a `notification` event. Anything beyond the type tag is
/// carried opaquely for the UI layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationPayload {
    /// Notification kind; `"chat"` bumps the coarse unread badge
    #[serde(rename = "type")]
    pub kind: String,
    /// Remaining fields, untouched
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl NotificationPayload {
    /// Whether this notification affects the chat unread badge
    pub fn is_chat(&self) -> bool {
        self.kind == "chat"
    }
}
