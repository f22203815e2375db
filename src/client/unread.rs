//! Unread Counter
//!
//! Per-peer unread bookkeeping plus the coarse session-wide badge driven by
//! `notification` events. `increment` and `reset` are the only mutations of
//! the per-peer counts; counts never go negative.

use std::collections::HashMap;

/// Per-peer unread counts and the coarse notification badge.
#[derive(Debug, Default)]
pub struct UnreadCounter {
    counts: HashMap<String, u32>,
    badge: u64,
}

impl UnreadCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the counts from a fresh conversation load
    pub fn prime(&mut self, counts: impl IntoIterator<Item = (String, u32)>) {
        self.counts = counts.into_iter().collect();
    }

    /// Bump the count for a peer. Only called when the message's sender is
    /// not the currently selected peer.
    pub fn increment(&mut self, peer_id: &str) -> u32 {
        let count = self.counts.entry(peer_id.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Zero the count for a peer. Idempotent; applied optimistically on
    /// selection without waiting for the mark-read round-trip.
    pub fn reset(&mut self, peer_id: &str) {
        self.counts.insert(peer_id.to_string(), 0);
    }

    /// Current count for a peer
    pub fn count(&self, peer_id: &str) -> u32 {
        self.counts.get(peer_id).copied().unwrap_or(0)
    }

    /// Sum across all peers
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Coarse +1 from a chat notification, decoupled from per-peer counts
    pub fn bump_badge(&mut self) -> u64 {
        self.badge += 1;
        self.badge
    }

    /// Current coarse badge value
    pub fn badge(&self) -> u64 {
        self.badge
    }

    /// Drop all counts and the badge (logout)
    pub fn clear(&mut self) {
        self.counts.clear();
        self.badge = 0;
    }
}
