// Single routing entry point for inbound session events
//
// The relay owns the session registry and the room directory together, so
// the single-room invariant can be enforced across both in one step.

// Public API - what other modules can use
pub use dispatcher::Relay;
pub use errors::RelayError;
pub use events::{Delivery, InboundEvent, OutboundEvent, RelayStats};
pub use handlers::get_stats;

// Internal modules
mod dispatcher;
mod errors;
mod events;
mod handlers;
