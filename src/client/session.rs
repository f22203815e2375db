//! Chat Session
//!
//! The reconciliation service. A `ChatSession` owns the conversation store,
//! unread counter, thread cache and presence snapshot, and is the only thing
//! that mutates them. For every event it decides three independent outcomes:
//! whether the conversation list reorders, whether an unread count changes,
//! and whether the open thread grows.
//!
//! Sessions are constructed explicitly and disposed explicitly; lifecycle is
//! tied to the authenticated user, not to module load.

use crate::shared::conversation::{ConversationSummary, LastMessage};
use crate::shared::error::ChatError;
use crate::shared::event::LiveEvent;
use crate::shared::identity::UserIdentity;
use crate::shared::message::{ChatMessage, ThreadMessage};
use crate::shared::presence::PresenceSet;

use super::api::ChatApiClient;
use super::config::Config;
use super::conversations::ConversationStore;
use super::socket::{SocketClient, SocketHandle, SocketStatus};
use super::thread_cache::ThreadCache;
use super::unread::UnreadCounter;

/// Client-side chat state for one authenticated user.
#[derive(Debug)]
pub struct ChatSession {
    config: Config,
    api: ChatApiClient,
    local_user: UserIdentity,
    conversations: ConversationStore,
    unread: UnreadCounter,
    thread: ThreadCache,
    presence: PresenceSet,
    socket: Option<SocketHandle>,
    last_error: Option<String>,
}

impl ChatSession {
    /// Create a session for the authenticated user. No network activity
    /// happens until `connect` or one of the load operations is called.
    pub fn new(config: Config, local_user: UserIdentity) -> Self {
        let api = ChatApiClient::new(config.clone());
        Self {
            config,
            api,
            local_user,
            conversations: ConversationStore::new(),
            unread: UnreadCounter::new(),
            thread: ThreadCache::new(),
            presence: PresenceSet::new(),
            socket: None,
            last_error: None,
        }
    }

    /// The authenticated local user
    pub fn local_user(&self) -> &UserIdentity {
        &self.local_user
    }

    // ── Connection ──────────────────────────────────────────────────────

    /// Establish the live connection for this user. A no-op when a
    /// connection for the same user id already exists; must be called
    /// within a tokio runtime.
    pub fn connect(&mut self) {
        if let Some(handle) = &self.socket {
            if handle.user_id() == self.local_user.id {
                return;
            }
        }
        if let Some(mut stale) = self.socket.take() {
            stale.close();
        }
        let client = SocketClient::new(self.config.clone());
        self.socket = Some(client.connect(&self.local_user.id));
    }

    /// Current connection status; `Disconnected` when never connected
    pub fn socket_status(&self) -> SocketStatus {
        self.socket
            .as_ref()
            .map(|h| h.status())
            .unwrap_or(SocketStatus::Disconnected)
    }

    /// Drain buffered socket events and apply each to the stores, in
    /// delivery order. Returns how many events were applied.
    pub fn poll_events(&mut self) -> usize {
        let mut applied = 0;
        loop {
            let Some(event) = self.socket.as_mut().and_then(|h| h.try_next_event()) else {
                break;
            };
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next socket event and apply it. `None` once the stream
    /// has closed or no connection exists.
    pub async fn recv_event(&mut self) -> Option<LiveEvent> {
        let event = self.socket.as_mut()?.next_event().await?;
        self.handle_event(event.clone());
        Some(event)
    }

    // ── Loads and user actions ──────────────────────────────────────────

    /// Fetch all conversation summaries and replace the store wholesale.
    /// On failure the store is left empty and the error is surfaced.
    pub async fn load_conversations(&mut self) -> Result<(), ChatError> {
        match self.api.get_conversations().await {
            Ok(summaries) => {
                self.unread.prime(
                    summaries
                        .iter()
                        .map(|s| (s.peer.id.clone(), s.unread_count)),
                );
                self.conversations.replace_all(summaries);
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                self.conversations.clear();
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Select a peer: zero its unread count immediately, synthesize an
    /// ephemeral conversation when none exists, issue the durable
    /// mark-as-read in the background and fetch the thread. A reselection
    /// while the fetch is in flight wins; the stale result is discarded.
    pub async fn select_peer(&mut self, peer: UserIdentity) -> Result<(), ChatError> {
        // Optimistic reset, before any suspension point.
        self.unread.reset(&peer.id);
        self.conversations.set_unread(&peer.id, 0);
        if self.conversations.add_ephemeral_peer(&peer) {
            tracing::debug!("[CHAT] Synthesized ephemeral conversation for peer {}", peer.id);
        }

        let ticket = self.thread.select(peer.clone());

        // Durable read acknowledgement; a failure here must not block
        // further message processing.
        let api = self.api.clone();
        let peer_id = peer.id.clone();
        tokio::spawn(async move {
            if let Err(e) = api.mark_read(&peer_id).await {
                tracing::warn!("[CHAT] mark-as-read failed for peer {}: {}", peer_id, e);
            }
        });

        match self.api.get_thread(&peer.id).await {
            Ok(messages) => {
                let resolved: Vec<ThreadMessage> = messages
                    .iter()
                    .map(|m| m.resolve(&self.local_user))
                    .collect();
                self.thread.commit_load(&ticket, resolved);
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                // The thread was already cleared at selection time.
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Drop the current selection and its thread
    pub fn clear_selection(&mut self) {
        self.thread.clear_selection();
    }

    /// Send a message to the selected peer. The message enters the thread
    /// only after the backend confirms persistence, with its bare-id sender
    /// rehydrated to the local identity.
    pub async fn send_message(&mut self, text: &str) -> Result<ThreadMessage, ChatError> {
        let peer = self
            .thread
            .selected()
            .cloned()
            .ok_or(ChatError::NoSelection)?;

        let created = self.api.send_message(&peer.id, text).await?;
        let resolved = created.resolve(&self.local_user);

        self.thread.append_self_sent(resolved.clone());
        self.conversations
            .upsert_from_incoming(&peer, LastMessage::from_message(&resolved), 0);
        Ok(resolved)
    }

    // ── Event reconciliation ────────────────────────────────────────────

    /// Apply one live event to the stores.
    pub fn handle_event(&mut self, event: LiveEvent) {
        match event {
            LiveEvent::NewMessage(message) => self.apply_direct_message(message),
            LiveEvent::GroupMessage { message, group_id } => {
                self.apply_group_message(message, &group_id)
            }
            LiveEvent::OnlineUsers(ids) => {
                self.presence.replace_all(ids);
            }
            LiveEvent::Notification(notification) => {
                if notification.is_chat() {
                    self.unread.bump_badge();
                }
            }
        }
    }

    fn apply_direct_message(&mut self, message: ChatMessage) {
        let resolved = message.resolve(&self.local_user);

        if resolved.is_own {
            // Echo of our own send (this session already appended it on
            // acknowledgement, another device may have sent it). The thread
            // never takes these; the list preview still moves when the
            // recipient is known.
            if let Some(receiver_id) = message.receiver_id.as_deref() {
                let peer = self
                    .conversations
                    .find(receiver_id)
                    .map(|s| s.peer.clone())
                    .unwrap_or_else(|| UserIdentity::unknown(receiver_id));
                self.conversations.upsert_from_incoming(
                    &peer,
                    LastMessage::from_message(&resolved),
                    0,
                );
            }
            return;
        }

        let sender = resolved.sender.clone();
        let preview = LastMessage::from_message(&resolved);

        if self.thread.is_selected(&sender.id) {
            // Already viewing this peer: thread grows, unread stays put.
            self.conversations.upsert_from_incoming(&sender, preview, 0);
            self.thread.append_inbound(&sender.id, resolved);
        } else {
            self.conversations.upsert_from_incoming(&sender, preview, 1);
            let count = self.unread.increment(&sender.id);
            self.conversations.set_unread(&sender.id, count);
        }
    }

    fn apply_group_message(&mut self, message: ChatMessage, group_id: &str) {
        let resolved = message.resolve(&self.local_user);
        if resolved.is_own {
            return;
        }

        // Refresh the group's list entry when we have one.
        if let Some(summary) = self.conversations.find(group_id) {
            let peer = summary.peer.clone();
            self.conversations
                .upsert_from_incoming(&peer, LastMessage::from_message(&resolved), 0);
        }

        if self.thread.is_selected(group_id) {
            self.thread.append_inbound(group_id, resolved);
        } else {
            let count = self.unread.increment(group_id);
            self.conversations.set_unread(group_id, count);
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// Conversation summaries in display order
    pub fn conversations(&self) -> &[ConversationSummary] {
        self.conversations.summaries()
    }

    /// Messages of the open thread, oldest first
    pub fn messages(&self) -> &[ThreadMessage] {
        self.thread.messages()
    }

    /// The currently selected peer, if any
    pub fn selected_peer(&self) -> Option<&UserIdentity> {
        self.thread.selected()
    }

    /// Unread count for a peer
    pub fn unread(&self, peer_id: &str) -> u32 {
        self.unread.count(peer_id)
    }

    /// Total unread across all peers
    pub fn unread_total(&self) -> u32 {
        self.unread.total()
    }

    /// Coarse notification badge
    pub fn badge(&self) -> u64 {
        self.unread.badge()
    }

    /// Whether a peer is currently online
    pub fn is_peer_online(&self, peer_id: &str) -> bool {
        self.presence.contains(peer_id)
    }

    /// Snapshot of the online peer ids
    pub fn online_peers(&self) -> Vec<String> {
        self.presence.ids().map(str::to_string).collect()
    }

    /// Error from the most recent user-initiated load, for a retry affordance
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Tear everything down: close the socket and reset all stores
    /// (logout/unmount).
    pub fn dispose(&mut self) {
        if let Some(mut handle) = self.socket.take() {
            handle.close();
        }
        self.conversations.clear();
        self.unread.clear();
        self.thread.clear_selection();
        self.presence.clear();
        self.last_error = None;
        tracing::info!("[CHAT] Session disposed for user {}", self.local_user.id);
    }
}
