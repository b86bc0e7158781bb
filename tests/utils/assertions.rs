//! Test assertion helpers - fluent API for verifying test expectations
#![allow(dead_code)] // Test utilities may not all be used in every test

use serde_json::Value;

use signal_relay::{OutboundEvent, SessionId};

use super::setup::TestSetup;

// ============================================================================
// Assertion Helpers
// ============================================================================

pub struct MessageAssertion<'a> {
    setup: &'a TestSetup,
    sessions: Vec<&'a str>,
}

fn ids(names: &[&str]) -> Vec<SessionId> {
    names.iter().map(|n| SessionId::from(*n)).collect()
}

impl<'a> MessageAssertion<'a> {
    /// Create an assertion for every session in the setup
    pub fn for_all_sessions(setup: &'a TestSetup) -> Self {
        let sessions = setup.sessions.iter().map(String::as_str).collect();
        Self { setup, sessions }
    }

    /// Create an assertion for specific sessions
    pub fn for_sessions(setup: &'a TestSetup, sessions: Vec<&'a str>) -> Self {
        Self { setup, sessions }
    }

    pub fn for_session(setup: &'a TestSetup, session: &'a str) -> Self {
        Self::for_sessions(setup, vec![session])
    }

    /// Assert that every session's next event is `expected` (consumes it)
    pub async fn received(self, expected: OutboundEvent) -> Self {
        for session in &self.sessions {
            let event = self
                .setup
                .mock_conn_manager
                .consume_message_for(session)
                .await;
            assert_eq!(
                event.as_ref(),
                Some(&expected),
                "{} received the wrong event",
                session
            );
        }
        self
    }

    pub async fn received_existing_users(self, users: &[&str]) -> Self {
        self.received(OutboundEvent::ExistingUsers { users: ids(users) })
            .await
    }

    pub async fn received_user_joined(self, id: &str) -> Self {
        self.received(OutboundEvent::UserJoined {
            id: SessionId::from(id),
        })
        .await
    }

    pub async fn received_user_left(self, id: &str) -> Self {
        self.received(OutboundEvent::UserLeft {
            id: SessionId::from(id),
        })
        .await
    }

    /// Assert the next event is a signal whose payload equals `expected`
    pub async fn received_signal(self, expected: Value) -> Self {
        let Value::Object(payload) = expected else {
            panic!("signal payloads are objects");
        };
        self.received(OutboundEvent::Signal { payload }).await
    }

    /// Assert the next event is an error frame (consumes it)
    pub async fn received_error(self) -> Self {
        for session in &self.sessions {
            let event = self
                .setup
                .mock_conn_manager
                .consume_message_for(session)
                .await;
            assert!(
                matches!(event, Some(OutboundEvent::Error { .. })),
                "{} should have received an error, got {:?}",
                session,
                event
            );
        }
        self
    }

    /// Assert that no undelivered events remain
    pub async fn received_no_messages(self) {
        for session in &self.sessions {
            let messages = self.setup.mock_conn_manager.get_messages_for(session).await;
            assert!(
                messages.is_empty(),
                "{} should not have received any messages, got {:?}",
                session,
                messages
            );
        }
    }

    /// Count how many events matching `predicate` a session has pending (non-consuming)
    pub async fn count_matching(
        &self,
        session: &str,
        predicate: impl Fn(&OutboundEvent) -> bool,
    ) -> usize {
        self.setup
            .mock_conn_manager
            .get_messages_for(session)
            .await
            .iter()
            .filter(|event| predicate(event))
            .count()
    }
}
