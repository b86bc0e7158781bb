use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

use signal_relay::{ConnectionManager, OutboundEvent, SessionId};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Records every event the relay asks to deliver, per recipient
#[derive(Clone, Default)]
pub struct MockConnectionManager {
    sent_messages: Arc<RwLock<HashMap<SessionId, VecDeque<OutboundEvent>>>>,
    connected_sessions: Arc<RwLock<Vec<SessionId>>>,
}

#[allow(dead_code)]
impl MockConnectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_messages_for(&self, session: &str) -> Vec<OutboundEvent> {
        self.sent_messages
            .read()
            .await
            .get(&SessionId::from(session))
            .map(|queue| queue.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Pop the oldest undelivered event for a session
    pub async fn consume_message_for(&self, session: &str) -> Option<OutboundEvent> {
        self.sent_messages
            .write()
            .await
            .get_mut(&SessionId::from(session))
            .and_then(VecDeque::pop_front)
    }

    pub async fn clear_messages(&self) {
        self.sent_messages.write().await.clear();
    }

    pub async fn is_connected(&self, session: &str) -> bool {
        self.connected_sessions
            .read()
            .await
            .contains(&SessionId::from(session))
    }
}

#[async_trait]
impl ConnectionManager for MockConnectionManager {
    async fn add_connection(&self, session: SessionId, _sender: mpsc::UnboundedSender<String>) {
        self.connected_sessions.write().await.push(session);
    }

    async fn remove_connection(&self, session: &SessionId) {
        self.connected_sessions.write().await.retain(|s| s != session);
    }

    async fn send_to_session(&self, session: &SessionId, event: &OutboundEvent) {
        self.sent_messages
            .write()
            .await
            .entry(session.clone())
            .or_default()
            .push_back(event.clone());
    }

    async fn send_to_sessions(&self, sessions: &[SessionId], event: &OutboundEvent) {
        for session in sessions {
            self.send_to_session(session, event).await;
        }
    }
}
