// Public API - what other modules can use
pub use registry::SessionRegistry;
pub use types::SessionId;

// Internal modules
mod registry;
mod types;
