// Library crate for the signaling relay
// This file exposes the public API for integration tests

pub mod app;
pub mod config;
pub mod presence;
pub mod relay;
pub mod room;
pub mod session;
pub mod shared;
pub mod signal;
pub mod websockets;

// Re-export commonly used types for easier access in tests
pub use app::build_router;
pub use config::ServerConfig;
pub use relay::{Delivery, InboundEvent, OutboundEvent, Relay, RelayError, RelayStats};
pub use room::RoomName;
pub use session::SessionId;
pub use shared::{AppError, AppState};
pub use websockets::{ConnectionManager, InMemoryConnectionManager, MessageType, WebSocketMessage};
