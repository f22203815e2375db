//! Live Socket Connection Manager
//!
//! Owns the single live connection to the chat gateway for an authenticated
//! user. `connect(user_id)` returns a [`SocketHandle`]; the handle owns the
//! reader task and tears it down on `close()` or drop, so there is never more
//! than one connection per handle. Connection loss is surfaced through
//! [`SocketStatus`]; this layer applies no retry or backoff policy of its
//! own.
//!
//! The gateway streams newline-delimited JSON event frames (optionally
//! SSE-style `data: ` prefixed); each parsed frame is delivered in receipt
//! order over an unbounded channel.

use futures_util::StreamExt;
use reqwest::Client;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::config::Config;
use crate::shared::event::LiveEvent;

/// Connection status reported by the socket layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketStatus {
    Connecting,
    Connected,
    Disconnected,
    Error(String),
}

/// Factory for live socket connections
#[derive(Debug, Clone)]
pub struct SocketClient {
    config: Config,
}

impl SocketClient {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Establish a live connection scoped to the given user id.
    ///
    /// Must be called within a tokio runtime; the reader task is spawned
    /// immediately.
    pub fn connect(&self, user_id: &str) -> SocketHandle {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (status_tx, status_rx) = watch::channel(SocketStatus::Connecting);

        let url = format!("{}/chat?userId={}", self.config.socket_url(), user_id);
        let token = self.config.get_token().cloned();
        let task_status = status_tx.clone();

        let task = tokio::spawn(async move {
            read_event_stream(url, token, event_tx, task_status).await;
        });

        SocketHandle {
            user_id: user_id.to_string(),
            events: event_rx,
            status: status_rx,
            status_tx,
            task: Some(task),
        }
    }
}

/// Handle to a live socket connection.
///
/// Dropping the handle aborts the reader task; only the Connection Manager
/// creates these, so the connection is a single shared resource per session.
#[derive(Debug)]
pub struct SocketHandle {
    user_id: String,
    events: mpsc::UnboundedReceiver<LiveEvent>,
    status: watch::Receiver<SocketStatus>,
    status_tx: watch::Sender<SocketStatus>,
    task: Option<JoinHandle<()>>,
}

impl SocketHandle {
    /// The user id this connection is scoped to
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Current connection status
    pub fn status(&self) -> SocketStatus {
        self.status.borrow().clone()
    }

    /// Wait for the next event; `None` once the stream has closed
    pub async fn next_event(&mut self) -> Option<LiveEvent> {
        self.events.recv().await
    }

    /// Check for a buffered event without waiting
    pub fn try_next_event(&mut self) -> Option<LiveEvent> {
        self.events.try_recv().ok()
    }

    /// Tear the connection down
    pub fn close(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = self.status_tx.send(SocketStatus::Disconnected);
            tracing::info!("[SOCKET] Connection closed for user {}", self.user_id);
        }
    }
}

impl Drop for SocketHandle {
    fn drop(&mut self) {
        self.close();
    }
}

/// Read the event stream for one connection lifetime.
///
/// No reconnect loop here: when the stream ends or errors, status moves to
/// `Disconnected`/`Error` and the task exits. Events missed while
/// disconnected are only recoverable by the next full REST load.
async fn read_event_stream(
    url: String,
    token: Option<String>,
    event_tx: mpsc::UnboundedSender<LiveEvent>,
    status: watch::Sender<SocketStatus>,
) {
    let client = Client::new();
    let mut request = client.get(&url);
    if let Some(token) = token.as_ref() {
        request = request.header("Authorization", format!("Bearer {}", token));
    }

    tracing::info!("[SOCKET] Connecting to {}", url);
    let response = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!("[SOCKET] Connection failed: {}", e);
            let _ = status.send(SocketStatus::Error(format!("network: {}", e)));
            return;
        }
    };

    if !response.status().is_success() {
        tracing::error!("[SOCKET] Connection rejected with status {}", response.status());
        let _ = status.send(SocketStatus::Error(format!("http: {}", response.status())));
        return;
    }

    tracing::info!("[SOCKET] Connected");
    let _ = status.send(SocketStatus::Connected);

    let mut stream = response.bytes_stream();
    let mut buffer = String::new();

    while let Some(chunk_result) = stream.next().await {
        let chunk = match chunk_result {
            Ok(chunk) => chunk,
            Err(e) => {
                tracing::warn!("[SOCKET] Stream error: {}", e);
                let _ = status.send(SocketStatus::Error(format!("stream: {}", e)));
                return;
            }
        };

        let chunk_str = match std::str::from_utf8(&chunk) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("[SOCKET] Invalid UTF-8 in event stream: {}", e);
                let _ = status.send(SocketStatus::Error("invalid utf-8".to_string()));
                return;
            }
        };
        buffer.push_str(chunk_str);

        // Process complete lines
        while let Some(newline_pos) = buffer.find('\n') {
            let line = buffer[..newline_pos].trim_end_matches('\r').to_string();
            buffer = buffer[newline_pos + 1..].to_string();

            let Some(frame) = extract_frame(&line) else {
                continue;
            };

            match serde_json::from_str::<LiveEvent>(frame) {
                Ok(event) => {
                    tracing::debug!("[SOCKET] Event received: {:?}", event_name(&event));
                    if event_tx.send(event).is_err() {
                        // Receiver dropped; the session is gone.
                        return;
                    }
                }
                Err(e) => {
                    tracing::warn!("[SOCKET] Unrecognized event frame: {} | line: {}", e, frame);
                }
            }
        }
    }

    tracing::info!("[SOCKET] Stream closed by server");
    let _ = status.send(SocketStatus::Disconnected);
}

/// Pull the JSON payload out of a stream line, skipping keep-alives.
fn extract_frame(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(':') {
        return None;
    }
    if let Some(data) = line.strip_prefix("data: ") {
        return Some(data);
    }
    if line.starts_with('{') && line.ends_with('}') {
        return Some(line);
    }
    None
}

fn event_name(event: &LiveEvent) -> &'static str {
    match event {
        LiveEvent::NewMessage(_) => "newMessage",
        LiveEvent::GroupMessage { .. } => "groupMessage",
        LiveEvent::OnlineUsers(_) => "getOnlineUsers",
        LiveEvent::Notification(_) => "notification",
    }
}
