use async_trait::async_trait;
use axum::{
    extract::{ws::WebSocket, State, WebSocketUpgrade},
    response::Response,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::relay::{InboundEvent, Relay};
use crate::session::SessionId;
use crate::shared::AppState;
use crate::websockets::messages::WebSocketMessage;

use super::socket::{Connection, MessageHandler};

/// Decodes client frames and hands them to the relay
pub struct RelayMessageHandler {
    relay: Arc<Relay>,
}

impl RelayMessageHandler {
    pub fn new(relay: Arc<Relay>) -> Self {
        Self { relay }
    }
}

#[async_trait]
impl MessageHandler for RelayMessageHandler {
    async fn handle_message(&self, session: &SessionId, message: String) {
        debug!(session_id = %session, message = %message, "Received message");

        let event = match WebSocketMessage::parse(&message).and_then(InboundEvent::try_from) {
            Ok(event) => event,
            Err(e) => {
                self.relay.report(session, &e).await;
                return;
            }
        };

        // Rejections are logged and answered inside the relay
        let _ = self.relay.dispatch(session, event).await;
    }
}

/// WebSocket endpoint; every accepted socket becomes one session
/// GET /ws
pub async fn websocket_handler(ws: WebSocketUpgrade, State(app_state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_websocket_connection(socket, app_state))
}

/// Handle the upgraded WebSocket connection
async fn handle_websocket_connection(socket: WebSocket, app_state: AppState) {
    let session_id = SessionId::generate();
    info!(session_id = %session_id, "WebSocket connection established");

    // Create the outbound channel (app -> client)
    let (outbound_sender, outbound_receiver) = mpsc::unbounded_channel::<String>();

    app_state
        .connection_manager
        .add_connection(session_id.clone(), outbound_sender)
        .await;

    if app_state
        .relay
        .dispatch(&session_id, InboundEvent::Connect)
        .await
        .is_err()
    {
        app_state
            .connection_manager
            .remove_connection(&session_id)
            .await;
        return;
    }

    let message_handler = Arc::new(RelayMessageHandler::new(Arc::clone(&app_state.relay)));
    let connection = Connection::new(
        session_id.clone(),
        Box::new(socket),
        outbound_receiver,
        message_handler,
    );

    // Run the connection until disconnect
    match connection.run().await {
        Ok(()) => {
            info!(session_id = %session_id, "WebSocket connection closed cleanly");
        }
        Err(e) => {
            warn!(session_id = %session_id, error = %e, "WebSocket connection error");
        }
    }

    // Disconnect is an unconditional leave, whatever the socket's fate
    let _ = app_state
        .relay
        .dispatch(&session_id, InboundEvent::Disconnect)
        .await;
    app_state
        .connection_manager
        .remove_connection(&session_id)
        .await;

    info!(session_id = %session_id, "Session terminated");
}
