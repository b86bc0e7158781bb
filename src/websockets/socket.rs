use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};
use futures::stream::StreamExt;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::session::SessionId;

/// Simple WebSocket abstraction - all we care about is send/receive
#[async_trait]
pub trait SocketWrapper: Send {
    /// Send a text message to the client
    async fn send_message(&mut self, message: String) -> Result<(), SocketError>;

    /// Receive the next text message from the client (None if connection closed)
    async fn receive_message(&mut self) -> Result<Option<String>, SocketError>;

    /// Close the connection
    async fn close(&mut self) -> Result<(), SocketError>;
}

/// Handler for incoming WebSocket messages
#[async_trait]
pub trait MessageHandler: Send + Sync {
    /// Handle an incoming message from the client
    async fn handle_message(&self, session: &SessionId, message: String);
}

#[derive(Debug, Error)]
pub enum SocketError {
    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Receive failed: {0}")]
    ReceiveFailed(String),
}

/// Direct implementation on axum's WebSocket
#[async_trait]
impl SocketWrapper for WebSocket {
    async fn send_message(&mut self, message: String) -> Result<(), SocketError> {
        self.send(Message::Text(message))
            .await
            .map_err(|e| SocketError::SendFailed(e.to_string()))
    }

    async fn receive_message(&mut self) -> Result<Option<String>, SocketError> {
        loop {
            match self.next().await {
                Some(Ok(Message::Text(text))) => return Ok(Some(text)),
                Some(Ok(Message::Binary(data))) => {
                    debug!(bytes = data.len(), "Ignoring binary frame");
                }
                Some(Ok(Message::Close(frame))) => {
                    debug!(
                        code = frame.as_ref().map(|f| f.code),
                        "Client sent close frame"
                    );
                    return Ok(None);
                }
                // Pings are answered by axum
                Some(Ok(Message::Ping(_) | Message::Pong(_))) => {}
                None => return Ok(None),
                Some(Err(e)) => return Err(SocketError::ReceiveFailed(e.to_string())),
            }
        }
    }

    async fn close(&mut self) -> Result<(), SocketError> {
        self.send(Message::Close(None))
            .await
            .map_err(|e| SocketError::SendFailed(e.to_string()))
    }
}

/// One client's socket paired with its outbound queue
///
/// Frames queued by the `ConnectionManager` are written to the socket, and
/// frames read from the socket go to the `MessageHandler` tagged with the
/// session they came from.
pub struct Connection {
    pub session: SessionId,
    socket: Box<dyn SocketWrapper>,
    outbound_receiver: mpsc::UnboundedReceiver<String>,
    message_handler: Arc<dyn MessageHandler>,
}

impl Connection {
    pub fn new(
        session: SessionId,
        socket: Box<dyn SocketWrapper>,
        outbound_receiver: mpsc::UnboundedReceiver<String>,
        message_handler: Arc<dyn MessageHandler>,
    ) -> Self {
        Self {
            session,
            socket,
            outbound_receiver,
            message_handler,
        }
    }

    /// Pumps frames both ways until either side goes away
    #[instrument(name = "connection", skip_all, fields(session_id = %self.session))]
    pub async fn run(mut self) -> Result<(), SocketError> {
        loop {
            tokio::select! {
                msg = self.outbound_receiver.recv() => {
                    let Some(message) = msg else {
                        debug!("Outbound queue closed");
                        break;
                    };
                    if let Err(e) = self.socket.send_message(message).await {
                        debug!(error = %e, "Failed to write frame");
                        return Err(e);
                    }
                }

                msg = self.socket.receive_message() => {
                    match msg {
                        Ok(Some(message)) => {
                            self.message_handler
                                .handle_message(&self.session, message)
                                .await;
                        }
                        Ok(None) => {
                            debug!("Client disconnected");
                            break;
                        }
                        Err(e) => {
                            debug!(error = %e, "Failed to read frame");
                            return Err(e);
                        }
                    }
                }
            }
        }

        if let Err(e) = self.socket.close().await {
            debug!(error = %e, "Close after disconnect failed");
        }
        Ok(())
    }
}
