//! Shared Module
//!
//! Wire and domain types for the chat client: identities, messages,
//! conversation summaries, live events, presence snapshots, configuration
//! and errors. Everything here is serialization-ready and free of client
//! state.

/// User identities and the wire-level sender reference
pub mod identity;

/// Message data structures
pub mod message;

/// Conversation summary (list-view) data structures
pub mod conversation;

/// Live event wire protocol
pub mod event;

/// Online-presence snapshot
pub mod presence;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use conversation::{ConversationSummary, LastMessage};
pub use error::ChatError;
pub use event::{LiveEvent, NotificationPayload};
pub use identity::{SenderRef, UserIdentity};
pub use message::{ChatMessage, SendMessageRequest, ThreadMessage};
pub use presence::PresenceSet;
