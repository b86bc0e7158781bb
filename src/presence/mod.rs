// Public API - what other modules can use
pub use notifier::{joined, left};

// Internal modules
mod notifier;
