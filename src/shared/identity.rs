//! User Identity Types
//!
//! Identity snapshots for the local user and conversation peers, plus the
//! wire-level sender reference. The backend is inconsistent about the sender
//! field: socket events carry a populated identity object, while the send
//! endpoint echoes back a bare id string. `SenderRef` models both shapes and
//! `resolve` turns either into a full `UserIdentity` before anything is
//! stored.

use serde::{Deserialize, Serialize};

/// A denormalized identity snapshot of a user (local user or peer).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    /// Opaque backend-issued user id
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Optional avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserIdentity {
    /// Create an identity snapshot
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            avatar: None,
        }
    }

    /// Placeholder identity for a sender we only know by id.
    /// Rendered as "unknown" rather than failing (partial-data fallback).
    pub fn unknown(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: "Unknown".to_string(),
            last_name: String::new(),
            avatar: None,
        }
    }

    /// Full display name, or a fallback when names are missing
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim().to_string();
        if name.is_empty() {
            "Unknown".to_string()
        } else {
            name
        }
    }

    /// Avatar initial (first letter of the first name)
    pub fn initial(&self) -> char {
        self.first_name
            .chars()
            .next()
            .unwrap_or('?')
            .to_ascii_uppercase()
    }
}

/// Wire-level sender field: either a populated identity object or a bare id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SenderRef {
    /// Full identity object (socket events, REST thread fetches)
    Populated(UserIdentity),
    /// Bare id string (send-endpoint responses)
    Bare(String),
}

impl SenderRef {
    /// The sender's user id, regardless of wire shape
    pub fn id(&self) -> &str {
        match self {
            SenderRef::Populated(identity) => &identity.id,
            SenderRef::Bare(id) => id,
        }
    }

    /// Whether this sender is the given local user
    pub fn is_local(&self, local_user_id: &str) -> bool {
        self.id() == local_user_id
    }

    /// Resolve to a full identity.
    ///
    /// A bare id matching the local user is rehydrated with the locally
    /// known identity; any other bare id falls back to a placeholder.
    pub fn resolve(&self, local_user: &UserIdentity) -> UserIdentity {
        match self {
            SenderRef::Populated(identity) => identity.clone(),
            SenderRef::Bare(id) if *id == local_user.id => local_user.clone(),
            SenderRef::Bare(id) => UserIdentity::unknown(id.clone()),
        }
    }
}

impl From<UserIdentity> for SenderRef {
    fn from(identity: UserIdentity) -> Self {
        SenderRef::Populated(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let user = UserIdentity::new("u1", "Ahmad", "Hassan");
        assert_eq!(user.full_name(), "Ahmad Hassan");
    }

    #[test]
    fn test_full_name_fallback() {
        let user = UserIdentity::new("u1", "", "");
        assert_eq!(user.full_name(), "Unknown");
    }

    #[test]
    fn test_initial() {
        let user = UserIdentity::new("u1", "ahmad", "Hassan");
        assert_eq!(user.initial(), 'A');
        assert_eq!(UserIdentity::new("u2", "", "").initial(), '?');
    }

    #[test]
    fn test_sender_ref_deserializes_bare_id() {
        let sender: SenderRef = serde_json::from_str("\"u42\"").unwrap();
        assert_eq!(sender.id(), "u42");
        assert!(matches!(sender, SenderRef::Bare(_)));
    }

    #[test]
    fn test_sender_ref_deserializes_object() {
        let json = r#"{"_id":"u1","firstName":"Ahmad","lastName":"Hassan"}"#;
        let sender: SenderRef = serde_json::from_str(json).unwrap();
        assert_eq!(sender.id(), "u1");
        assert!(matches!(sender, SenderRef::Populated(_)));
    }

    #[test]
    fn test_resolve_bare_local_id_rehydrates() {
        let local = UserIdentity::new("u1", "Ahmad", "Hassan");
        let sender = SenderRef::Bare("u1".to_string());
        let resolved = sender.resolve(&local);
        assert_eq!(resolved, local);
    }

    #[test]
    fn test_resolve_bare_foreign_id_falls_back() {
        let local = UserIdentity::new("u1", "Ahmad", "Hassan");
        let sender = SenderRef::Bare("u9".to_string());
        let resolved = sender.resolve(&local);
        assert_eq!(resolved.id, "u9");
        assert_eq!(resolved.first_name, "Unknown");
    }

    #[test]
    fn test_resolve_populated_is_passthrough() {
        let local = UserIdentity::new("u1", "Ahmad", "Hassan");
        let peer = UserIdentity::new("p1", "Fatima", "Ali");
        let sender = SenderRef::from(peer.clone());
        assert_eq!(sender.resolve(&local), peer);
    }
}
