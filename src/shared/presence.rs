//! Presence Snapshot
//!
//! Set of peer ids currently online. The gateway pushes the full set on each
//! `getOnlineUsers` event, so the snapshot is replaced wholesale rather than
//! merged incrementally.

use std::collections::HashSet;

/// The set of peer ids currently online.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceSet {
    online: HashSet<String>,
}

impl PresenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole snapshot with the latest server push
    pub fn replace_all(&mut self, ids: impl IntoIterator<Item = String>) {
        self.online = ids.into_iter().collect();
    }

    /// Whether a peer is currently online
    pub fn contains(&self, peer_id: &str) -> bool {
        self.online.contains(peer_id)
    }

    /// Iterate the online peer ids
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.online.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.online.len()
    }

    pub fn is_empty(&self) -> bool {
        self.online.is_empty()
    }

    pub fn clear(&mut self) {
        self.online.clear();
    }
}
