//! Conversation Store
//!
//! Ordered collection of conversation summaries, kept sorted by recency:
//! descending last-message time, stable on ties, entries with no history at
//! the bottom. At most one summary exists per peer id.

use crate::shared::conversation::{ConversationSummary, LastMessage};
use crate::shared::identity::UserIdentity;

/// The conversation list state.
#[derive(Debug, Default)]
pub struct ConversationStore {
    summaries: Vec<ConversationSummary>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the store wholesale with a fresh REST load and sort it.
    /// No merging with previous contents.
    pub fn replace_all(&mut self, summaries: Vec<ConversationSummary>) {
        self.summaries = summaries;
        self.sort();
    }

    /// Drop everything (load failure, logout)
    pub fn clear(&mut self) {
        self.summaries.clear();
    }

    /// Current summaries in display order
    pub fn summaries(&self) -> &[ConversationSummary] {
        &self.summaries
    }

    /// Find the summary for a peer
    pub fn find(&self, peer_id: &str) -> Option<&ConversationSummary> {
        self.summaries.iter().find(|s| s.peer.id == peer_id)
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Apply an incoming (or just-sent) message to the list: refresh the
    /// counterpart peer's preview and move it to the top, or synthesize a
    /// new summary when none exists yet. `seed_unread` is the unread count a
    /// synthesized summary starts with (1 for inbound from an unknown peer,
    /// 0 for self-sent).
    pub fn upsert_from_incoming(
        &mut self,
        peer: &UserIdentity,
        last_message: LastMessage,
        seed_unread: u32,
    ) {
        if let Some(pos) = self.summaries.iter().position(|s| s.peer.id == peer.id) {
            let mut summary = self.summaries.remove(pos);
            summary.update_last_message(last_message);
            self.summaries.insert(0, summary);
        } else {
            let mut summary = ConversationSummary::ephemeral(peer.clone());
            summary.update_last_message(last_message);
            summary.unread_count = seed_unread;
            self.summaries.insert(0, summary);
        }
    }

    /// Insert a placeholder summary for a peer with no prior conversation
    /// (deep-link preselection). Idempotent: an existing summary for the
    /// peer is left untouched. Returns whether an entry was inserted.
    pub fn add_ephemeral_peer(&mut self, peer: &UserIdentity) -> bool {
        if self.find(&peer.id).is_some() {
            return false;
        }
        // No last message, so the comparator puts it at the bottom.
        self.summaries
            .push(ConversationSummary::ephemeral(peer.clone()));
        true
    }

    /// Set the displayed unread count for a peer. Call sites are confined
    /// to the session, which mirrors the unread counter here.
    pub fn set_unread(&mut self, peer_id: &str, count: u32) {
        if let Some(summary) = self.summaries.iter_mut().find(|s| s.peer.id == peer_id) {
            summary.unread_count = count;
        }
    }

    fn sort(&mut self) {
        // Stable: ties keep their original relative order.
        self.summaries.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
    }
}
