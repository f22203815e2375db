//! Halaqa Chat - Client Synchronization Library
//!
//! Halaqa Chat is the client-side synchronization layer for a real-time
//! tutoring chat: it keeps a conversation list, per-peer unread counts, an
//! online-presence snapshot and the open message thread consistent while
//! REST responses and live socket events interleave.
//!
//! # Overview
//!
//! The authoritative message history lives on the backend; this library
//! holds a session-scoped projection of it and reconciles two inputs:
//!
//! - REST loads (conversation list, per-peer threads, send/mark-read)
//! - a live event stream (`newMessage`, `groupMessage`, `getOnlineUsers`,
//!   `notification`)
//!
//! # Module Structure
//!
//! - **`shared`** - Wire and domain types
//!   - Identities, messages, conversation summaries
//!   - Live event protocol, presence, configuration, errors
//!
//! - **`client`** - Stateful client machinery
//!   - REST client and live socket connection manager
//!   - Conversation store, unread counter, thread cache
//!   - [`client::ChatSession`], the reconciliation entry point
//!
//! # Usage
//!
//! ```rust,no_run
//! use halaqa_chat::client::{ChatSession, Config};
//! use halaqa_chat::shared::UserIdentity;
//!
//! # async fn example() -> Result<(), halaqa_chat::shared::ChatError> {
//! let mut config = Config::new();
//! config.set_token(Some("jwt".to_string()));
//!
//! let me = UserIdentity::new("u1", "Ahmad", "Hassan");
//! let mut session = ChatSession::new(config, me);
//!
//! session.connect();
//! session.load_conversations().await?;
//!
//! // Apply any buffered live events to the stores.
//! session.poll_events();
//! # Ok(())
//! # }
//! ```

/// Wire and domain types
pub mod shared;

/// Stateful client machinery
pub mod client;
