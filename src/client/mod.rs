//! Client Module
//!
//! The stateful half of the crate: REST client, live socket connection,
//! the stores (conversations, unread, thread cache) and the session that
//! reconciles them. [`session::ChatSession`] is the intended entry point;
//! the stores are public for direct use in tests and embedders that manage
//! their own wiring.

/// Session-scoped configuration (URLs, bearer token)
pub mod config;

/// REST client for the chat endpoints
pub mod api;

/// Live socket connection manager
pub mod socket;

/// Conversation list store
pub mod conversations;

/// Per-peer unread counts and the notification badge
pub mod unread;

/// Selected-peer message thread cache
pub mod thread_cache;

/// The reconciliation session tying the stores together
pub mod session;

pub use api::ChatApiClient;
pub use config::Config;
pub use conversations::ConversationStore;
pub use session::ChatSession;
pub use socket::{SocketClient, SocketHandle, SocketStatus};
pub use thread_cache::{LoadTicket, ThreadCache};
pub use unread::UnreadCounter;
