//! Conversation Summary Data Structure
//!
//! The lightweight list-view representation of a conversation: a peer
//! identity snapshot, a last-message preview used as the sort key, and the
//! unread count.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::identity::UserIdentity;
use super::message::ThreadMessage;

/// Last-message snapshot used for the list preview and recency sort.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LastMessage {
    /// Preview text
    #[serde(default)]
    pub text: String,
    /// When the message was created (the sort key)
    pub created_at: DateTime<Utc>,
    /// Who sent it
    pub sender_id: String,
}

impl LastMessage {
    /// Build a preview snapshot from a resolved thread message
    pub fn from_message(message: &ThreadMessage) -> Self {
        Self {
            text: message.text.clone(),
            created_at: message.created_at,
            sender_id: message.sender.id.clone(),
        }
    }
}

/// The list-view representation of a conversation with one peer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    /// Backend-issued conversation id (locally synthesized for ephemeral
    /// entries until the next full load)
    #[serde(rename = "_id", alias = "conversationId")]
    pub conversation_id: String,
    /// Denormalized peer identity snapshot, not a live reference
    pub peer: UserIdentity,
    /// Last message preview, absent for conversations with no history
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<LastMessage>,
    /// Number of unread messages from this peer
    #[serde(default)]
    pub unread_count: u32,
}

impl ConversationSummary {
    /// Placeholder entry for a peer with no prior history (deep links).
    /// No last message, zero unread, locally generated id.
    pub fn ephemeral(peer: UserIdentity) -> Self {
        Self {
            conversation_id: Uuid::new_v4().to_string(),
            peer,
            last_message: None,
            unread_count: 0,
        }
    }

    /// Replace the last-message preview
    pub fn update_last_message(&mut self, last_message: LastMessage) {
        self.last_message = Some(last_message);
    }

    /// Recency sort key: last-message time, or epoch when there is none
    /// (so summaries with no history sort to the bottom).
    pub fn sort_key(&self) -> DateTime<Utc> {
        self.last_message
            .as_ref()
            .map(|m| m.created_at)
            .unwrap_or_else(|| Utc.timestamp_opt(0, 0).single().unwrap_or_default())
    }
}
