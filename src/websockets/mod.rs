// Public API
pub use connection_manager::{ConnectionManager, InMemoryConnectionManager};
pub use handler::{websocket_handler, RelayMessageHandler};
pub use messages::{
    ConnectedPayload, ErrorPayload, ExistingUsersPayload, JoinPayload, MessageType,
    PresencePayload, WebSocketMessage,
};
pub use socket::{Connection, MessageHandler, SocketError, SocketWrapper};

// Internal modules
mod connection_manager;
mod handler;
mod messages;
mod socket;
