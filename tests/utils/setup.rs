use std::sync::Arc;

use signal_relay::{websockets::RelayMessageHandler, InboundEvent, Relay, SessionId};

use super::mocks::MockConnectionManager;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub relay: Arc<Relay>,
    pub mock_conn_manager: Arc<MockConnectionManager>,
    pub input_handler: RelayMessageHandler,
    pub sessions: Vec<String>,
}

pub struct TestSetupBuilder {
    sessions: Vec<String>,
}

#[allow(dead_code)]
impl TestSetupBuilder {
    pub fn new() -> Self {
        Self { sessions: vec![] }
    }

    /// Sessions connected (but in no room) when the setup is built
    pub fn with_sessions(mut self, sessions: Vec<&str>) -> Self {
        self.sessions = sessions.into_iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_two_sessions(self) -> Self {
        self.with_sessions(vec!["alice", "bob"])
    }

    pub fn with_three_sessions(self) -> Self {
        self.with_sessions(vec!["alice", "bob", "carol"])
    }

    pub async fn build(self) -> TestSetup {
        let mock_conn_manager = Arc::new(MockConnectionManager::new());
        let relay = Arc::new(Relay::new(mock_conn_manager.clone()));

        for session in &self.sessions {
            relay
                .dispatch(&SessionId::from(session.as_str()), InboundEvent::Connect)
                .await
                .unwrap();
        }
        // Drop the connection greetings so tests start from a clean slate
        mock_conn_manager.clear_messages().await;

        let input_handler = RelayMessageHandler::new(relay.clone());

        TestSetup {
            relay,
            mock_conn_manager,
            input_handler,
            sessions: self.sessions,
        }
    }
}
