//! Chat REST API Client
//!
//! Async wrapper over the conversation endpoints:
//!
//! - `GET /chat/conversations` - conversation summaries
//! - `GET /chat/{peerId}` - full message thread with one peer
//! - `POST /chat/send/{peerId}` - send a message
//! - `POST /chat/{peerId}/read` - mark a thread as read

use reqwest::Client;

use super::config::Config;
use crate::shared::conversation::ConversationSummary;
use crate::shared::error::ChatError;
use crate::shared::message::{ChatMessage, SendMessageRequest};

/// Chat API client
#[derive(Debug, Clone)]
pub struct ChatApiClient {
    config: Config,
    client: Client,
}

impl ChatApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Fetch all conversation summaries for the current user
    pub async fn get_conversations(&self) -> Result<Vec<ConversationSummary>, ChatError> {
        let url = self.config.api_url("/chat/conversations");
        let response = self.authorized(self.client.get(&url)).send().await?;
        let response = Self::check_status(response).await?;
        response
            .json::<Vec<ConversationSummary>>()
            .await
            .map_err(|e| ChatError::serialization(format!("Failed to parse response: {}", e)))
    }

    /// Fetch the full message history with a peer
    pub async fn get_thread(&self, peer_id: &str) -> Result<Vec<ChatMessage>, ChatError> {
        let url = self.config.api_url(&format!("/chat/{}", peer_id));
        let response = self.authorized(self.client.get(&url)).send().await?;
        let response = Self::check_status(response).await?;
        response
            .json::<Vec<ChatMessage>>()
            .await
            .map_err(|e| ChatError::serialization(format!("Failed to parse response: {}", e)))
    }

    /// Send a message to a peer; returns the created message.
    /// The response carries the sender as a bare id and must be rehydrated
    /// before it enters the thread cache.
    pub async fn send_message(&self, peer_id: &str, text: &str) -> Result<ChatMessage, ChatError> {
        let url = self.config.api_url(&format!("/chat/send/{}", peer_id));
        let request = SendMessageRequest {
            message: text.to_string(),
        };
        let response = self
            .authorized(self.client.post(&url))
            .json(&request)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        response
            .json::<ChatMessage>()
            .await
            .map_err(|e| ChatError::serialization(format!("Failed to parse response: {}", e)))
    }

    /// Mark the thread with a peer as read. Acknowledgement only; callers
    /// treat this as fire-and-forget.
    pub async fn mark_read(&self, peer_id: &str) -> Result<(), ChatError> {
        let url = self.config.api_url(&format!("/chat/{}/read", peer_id));
        let response = self.authorized(self.client.post(&url)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.config.get_token() {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ChatError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| status.to_string());
        Err(ChatError::api(status.as_u16(), body))
    }
}
