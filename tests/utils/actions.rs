use serde_json::{json, Value};

use signal_relay::{
    websockets::MessageHandler, InboundEvent, MessageType, RelayError, RoomName, SessionId,
    WebSocketMessage,
};

use super::setup::TestSetup;

// ============================================================================
// Action Helpers
// ============================================================================

#[allow(dead_code)]
impl TestSetup {
    /// Send a raw text frame as if it arrived on the session's socket
    pub async fn send_raw(&self, session: &str, frame: &str) {
        self.input_handler
            .handle_message(&SessionId::from(session), frame.to_string())
            .await;
    }

    /// Send a WebSocket message through the same path as a real client
    pub async fn send_message(&self, session: &str, message: WebSocketMessage) {
        let message_json = serde_json::to_string(&message).unwrap();
        self.send_raw(session, &message_json).await;
    }

    /// Clear all recorded messages
    pub async fn clear_messages(&self) {
        self.mock_conn_manager.clear_messages().await;
    }

    // ============================================================================
    // Convenience Action Methods
    // ============================================================================

    pub async fn connect(&self, session: &str) -> Result<(), RelayError> {
        self.relay
            .dispatch(&SessionId::from(session), InboundEvent::Connect)
            .await
    }

    pub async fn disconnect(&self, session: &str) -> Result<(), RelayError> {
        self.relay
            .dispatch(&SessionId::from(session), InboundEvent::Disconnect)
            .await
    }

    pub async fn send_join(&self, session: &str, room: &str) {
        self.send_message(
            session,
            WebSocketMessage::new(MessageType::Join, json!({ "room": room })),
        )
        .await;
    }

    pub async fn send_leave(&self, session: &str) {
        self.send_message(session, WebSocketMessage::new(MessageType::Leave, json!({})))
            .await;
    }

    pub async fn send_signal(&self, session: &str, payload: Value) {
        self.send_message(session, WebSocketMessage::new(MessageType::Signal, payload))
            .await;
    }

    pub async fn members_of(&self, room: &str) -> Option<Vec<String>> {
        self.relay
            .room_members(&RoomName::from(room))
            .await
            .map(|members| members.iter().map(ToString::to_string).collect())
    }
}
