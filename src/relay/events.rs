use serde_json::{Map, Value};

use crate::room::RoomName;
use crate::session::SessionId;

/// Everything the transport can report about a session
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    Connect,
    Join { room: RoomName },
    Leave,
    /// `to` is `None` when the client left it out; the router rejects that
    Signal {
        to: Option<SessionId>,
        payload: Map<String, Value>,
    },
    Disconnect,
}

impl InboundEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            InboundEvent::Connect => "connect",
            InboundEvent::Join { .. } => "join",
            InboundEvent::Leave => "leave",
            InboundEvent::Signal { .. } => "signal",
            InboundEvent::Disconnect => "disconnect",
        }
    }
}

/// Everything the relay can ask the transport to deliver
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundEvent {
    Connected { id: SessionId },
    ExistingUsers { users: Vec<SessionId> },
    UserJoined { id: SessionId },
    UserLeft { id: SessionId },
    /// The sender's payload with `from` set to the sender's id
    Signal { payload: Map<String, Value> },
    Error { message: String },
}

/// One outbound event and the sessions that must receive it
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub recipients: Vec<SessionId>,
    pub event: OutboundEvent,
}

impl Delivery {
    pub fn to(recipient: SessionId, event: OutboundEvent) -> Self {
        Self {
            recipients: vec![recipient],
            event,
        }
    }

    pub fn to_all(recipients: Vec<SessionId>, event: OutboundEvent) -> Self {
        Self { recipients, event }
    }
}

/// Counters exposed on `GET /stats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RelayStats {
    pub sessions: usize,
    pub rooms: usize,
    pub rejected_events: u64,
}
