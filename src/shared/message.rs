//! Chat Message Data Structures
//!
//! Wire-level message shape plus the resolved form held by the thread cache.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::{SenderRef, UserIdentity};

/// A message as it arrives off the wire (REST fetch, send response, socket).
///
/// The sender may be a populated object or a bare id depending on the code
/// path; call [`ChatMessage::resolve`] before storing it anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Server-assigned id; absent until the server acknowledges the message
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Sender reference (bare id or populated identity)
    pub sender_id: SenderRef,
    /// Recipient id, when the backend includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_id: Option<String>,
    /// Message text
    #[serde(alias = "message", default)]
    pub text: String,
    /// When the message was created
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Resolve the sender against the local user, producing the form the
    /// thread cache stores. "Is this message mine" is decided here, once.
    pub fn resolve(&self, local_user: &UserIdentity) -> ThreadMessage {
        let sender = self.sender_id.resolve(local_user);
        let is_own = sender.id == local_user.id;
        ThreadMessage {
            id: self.id.clone(),
            sender,
            text: self.text.clone(),
            created_at: self.created_at,
            is_own,
        }
    }
}

/// A message at rest in the thread cache: sender fully resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThreadMessage {
    /// Server-assigned id once acknowledged
    pub id: Option<String>,
    /// Resolved sender identity (never a bare id)
    pub sender: UserIdentity,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: DateTime<Utc>,
    /// Whether the local user authored this message
    pub is_own: bool,
}

impl ThreadMessage {
    /// Get a preview of the message (first N characters)
    pub fn preview(&self, max_len: usize) -> String {
        if self.text.chars().count() <= max_len {
            self.text.clone()
        } else {
            let mut preview: String = self.text.chars().take(max_len.saturating_sub(3)).collect();
            preview.push_str("...");
            preview
        }
    }
}

/// Body for `POST /chat/send/{peerId}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}
