use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, warn};

use super::messages::WebSocketMessage;
use crate::relay::OutboundEvent;
use crate::session::SessionId;

/// Delivery seam between the relay and the network
///
/// Sending to a session without a connection is a silent no-op; the
/// connection may have closed between the state change and the send.
#[async_trait]
pub trait ConnectionManager: Send + Sync {
    async fn add_connection(&self, session: SessionId, sender: mpsc::UnboundedSender<String>);

    async fn remove_connection(&self, session: &SessionId);

    async fn send_to_session(&self, session: &SessionId, event: &OutboundEvent);

    async fn send_to_sessions(&self, sessions: &[SessionId], event: &OutboundEvent);
}

pub struct InMemoryConnectionManager {
    // session -> outbound queue of encoded frames
    connections: Arc<RwLock<HashMap<SessionId, mpsc::UnboundedSender<String>>>>,
}

impl Default for InMemoryConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryConnectionManager {
    pub fn new() -> Self {
        Self {
            connections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn encode(event: &OutboundEvent) -> Option<String> {
        match WebSocketMessage::try_from(event).and_then(|message| message.to_json()) {
            Ok(json) => Some(json),
            Err(e) => {
                warn!(error = %e, "Failed to encode outbound message");
                None
            }
        }
    }
}

#[async_trait]
impl ConnectionManager for InMemoryConnectionManager {
    async fn add_connection(&self, session: SessionId, sender: mpsc::UnboundedSender<String>) {
        let mut connections = self.connections.write().await;
        connections.insert(session, sender);
    }

    async fn remove_connection(&self, session: &SessionId) {
        let mut connections = self.connections.write().await;
        connections.remove(session);
    }

    async fn send_to_session(&self, session: &SessionId, event: &OutboundEvent) {
        let Some(message) = Self::encode(event) else {
            return;
        };

        let connections = self.connections.read().await;
        if let Some(sender) = connections.get(session) {
            if sender.send(message).is_err() {
                debug!(session_id = %session, "Connection closed, dropping message");
            }
        } else {
            debug!(session_id = %session, "No connection for session, dropping message");
        }
    }

    async fn send_to_sessions(&self, sessions: &[SessionId], event: &OutboundEvent) {
        let Some(message) = Self::encode(event) else {
            return;
        };

        let connections = self.connections.read().await;
        for session in sessions {
            let Some(sender) = connections.get(session) else {
                debug!(session_id = %session, "No connection for session, dropping message");
                continue;
            };
            if sender.send(message.clone()).is_err() {
                debug!(session_id = %session, "Connection closed, dropping message");
            }
        }
    }
}
