use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::relay::{InboundEvent, OutboundEvent, RelayError};
use crate::room::RoomName;
use crate::session::SessionId;

/// Message types for WebSocket communication
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    // Client -> Server
    Join,
    Leave,

    // Both directions
    Signal,

    // Server -> Client
    Connected,
    ExistingUsers,
    UserJoined,
    UserLeft,
    Error,
}

/// Metadata for WebSocket messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSocketMessageMeta {
    pub timestamp: DateTime<Utc>,
}

/// Base structure for WebSocket messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSocketMessage {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    #[serde(default)]
    pub payload: Value,
    #[serde(default)]
    pub meta: Option<WebSocketMessageMeta>,
}

/// Client-to-Server message payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinPayload {
    pub room: String,
}

/// Server-to-Client message payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectedPayload {
    pub id: SessionId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistingUsersPayload {
    /// Session ids already in the room, in join order
    pub users: Vec<SessionId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresencePayload {
    pub id: SessionId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub message: String,
}

impl WebSocketMessage {
    pub fn new(message_type: MessageType, payload: Value) -> Self {
        Self {
            message_type,
            payload,
            meta: Some(WebSocketMessageMeta {
                timestamp: Utc::now(),
            }),
        }
    }

    fn with_payload<T: Serialize>(
        message_type: MessageType,
        payload: T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::new(message_type, serde_json::to_value(payload)?))
    }

    /// Parses one inbound text frame
    pub fn parse(text: &str) -> Result<Self, RelayError> {
        serde_json::from_str(text)
            .map_err(|e| RelayError::malformed(format!("invalid message: {}", e)))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Create a CONNECTED message
    pub fn connected(id: &SessionId) -> Result<Self, serde_json::Error> {
        Self::with_payload(MessageType::Connected, ConnectedPayload { id: id.clone() })
    }

    /// Create an EXISTING_USERS message
    pub fn existing_users(users: &[SessionId]) -> Result<Self, serde_json::Error> {
        Self::with_payload(
            MessageType::ExistingUsers,
            ExistingUsersPayload {
                users: users.to_vec(),
            },
        )
    }

    /// Create a USER_JOINED message
    pub fn user_joined(id: &SessionId) -> Result<Self, serde_json::Error> {
        Self::with_payload(MessageType::UserJoined, PresencePayload { id: id.clone() })
    }

    /// Create a USER_LEFT message
    pub fn user_left(id: &SessionId) -> Result<Self, serde_json::Error> {
        Self::with_payload(MessageType::UserLeft, PresencePayload { id: id.clone() })
    }

    /// Create a SIGNAL message carrying an already-tagged payload
    pub fn signal(payload: serde_json::Map<String, Value>) -> Self {
        Self::new(MessageType::Signal, Value::Object(payload))
    }

    /// Create an ERROR message
    pub fn error(message: &str) -> Result<Self, serde_json::Error> {
        Self::with_payload(
            MessageType::Error,
            ErrorPayload {
                message: message.to_string(),
            },
        )
    }
}

impl TryFrom<&OutboundEvent> for WebSocketMessage {
    type Error = serde_json::Error;

    fn try_from(event: &OutboundEvent) -> Result<Self, Self::Error> {
        match event {
            OutboundEvent::Connected { id } => Self::connected(id),
            OutboundEvent::ExistingUsers { users } => Self::existing_users(users),
            OutboundEvent::UserJoined { id } => Self::user_joined(id),
            OutboundEvent::UserLeft { id } => Self::user_left(id),
            OutboundEvent::Signal { payload } => Ok(Self::signal(payload.clone())),
            OutboundEvent::Error { message } => Self::error(message),
        }
    }
}

impl TryFrom<WebSocketMessage> for InboundEvent {
    type Error = RelayError;

    fn try_from(message: WebSocketMessage) -> Result<Self, Self::Error> {
        match message.message_type {
            MessageType::Join => {
                let join: JoinPayload = serde_json::from_value(message.payload)
                    .map_err(|e| RelayError::malformed(format!("invalid join payload: {}", e)))?;
                let room = RoomName::parse(&join.room)
                    .ok_or_else(|| RelayError::malformed("join requires a non-empty `room`"))?;
                Ok(InboundEvent::Join { room })
            }
            MessageType::Leave => Ok(InboundEvent::Leave),
            MessageType::Signal => {
                let Value::Object(payload) = message.payload else {
                    return Err(RelayError::malformed("signal payload must be an object"));
                };
                // A non-string `to` decodes as missing and is rejected by the router
                let to = payload
                    .get("to")
                    .and_then(Value::as_str)
                    .map(SessionId::from);
                Ok(InboundEvent::Signal { to, payload })
            }
            other => Err(RelayError::malformed(format!(
                "{:?} messages are sent by the server only",
                other
            ))),
        }
    }
}
