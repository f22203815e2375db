//! Message Thread Cache
//!
//! Holds the ordered message list for the currently selected peer only.
//! Selecting a different peer discards the old thread; selecting a
//! previously viewed peer re-fetches rather than reusing a stale cache.
//!
//! Loads are guarded against reselection races: `select` hands out a
//! [`LoadTicket`], and a fetched thread commits only if no further selection
//! happened while the request was in flight. The check happens at the point
//! of applying the fetched thread, not at the point of issuing the request.

use crate::shared::identity::UserIdentity;
use crate::shared::message::ThreadMessage;

/// Ticket issued at selection time; a thread load may only commit with a
/// ticket from the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    peer_id: String,
    epoch: u64,
}

impl LoadTicket {
    /// The peer this load was issued for
    pub fn peer_id(&self) -> &str {
        &self.peer_id
    }
}

/// The selected-peer message thread.
#[derive(Debug, Default)]
pub struct ThreadCache {
    selected: Option<UserIdentity>,
    messages: Vec<ThreadMessage>,
    epoch: u64,
}

impl ThreadCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a peer: discard the previous thread and issue a load ticket.
    pub fn select(&mut self, peer: UserIdentity) -> LoadTicket {
        self.epoch += 1;
        self.messages.clear();
        let ticket = LoadTicket {
            peer_id: peer.id.clone(),
            epoch: self.epoch,
        };
        self.selected = Some(peer);
        ticket
    }

    /// Drop the selection and its thread
    pub fn clear_selection(&mut self) {
        self.epoch += 1;
        self.selected = None;
        self.messages.clear();
    }

    /// The currently selected peer, if any
    pub fn selected(&self) -> Option<&UserIdentity> {
        self.selected.as_ref()
    }

    /// Whether the given id is the selected counterpart
    pub fn is_selected(&self, peer_id: &str) -> bool {
        self.selected.as_ref().is_some_and(|p| p.id == peer_id)
    }

    /// Messages of the open thread, oldest first
    pub fn messages(&self) -> &[ThreadMessage] {
        &self.messages
    }

    /// Commit a fetched thread. Rejected when the ticket predates a later
    /// selection, so a slow fetch for a moved-away-from peer can never
    /// overwrite the current thread. Returns whether the load was applied.
    pub fn commit_load(&mut self, ticket: &LoadTicket, messages: Vec<ThreadMessage>) -> bool {
        if ticket.epoch != self.epoch || !self.is_selected(&ticket.peer_id) {
            tracing::debug!(
                "[CHAT] Discarding stale thread load for peer {}",
                ticket.peer_id
            );
            return false;
        }
        self.messages = messages;
        true
    }

    /// Append an inbound message. Only valid when the message's counterpart
    /// is the selected peer; deduplicated by id against anything already in
    /// the thread (covers multi-device echoes of our own sends).
    pub fn append_inbound(&mut self, counterpart_id: &str, message: ThreadMessage) -> bool {
        if !self.is_selected(counterpart_id) {
            return false;
        }
        self.append_deduped(message)
    }

    /// Append a locally authored message after the server acknowledged it.
    /// Nothing enters the thread before acknowledgement, so there is no
    /// "sent but not really" ghost state to roll back.
    pub fn append_self_sent(&mut self, message: ThreadMessage) -> bool {
        if self.selected.is_none() {
            return false;
        }
        self.append_deduped(message)
    }

    fn append_deduped(&mut self, message: ThreadMessage) -> bool {
        if let Some(id) = message.id.as_deref() {
            if self.contains_id(id) {
                tracing::debug!("[CHAT] Dropping duplicate message {}", id);
                return false;
            }
        }
        self.messages.push(message);
        true
    }

    fn contains_id(&self, id: &str) -> bool {
        self.messages.iter().any(|m| m.id.as_deref() == Some(id))
    }
}
