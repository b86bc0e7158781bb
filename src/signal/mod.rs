// Public API - what other modules can use
pub use router::route;

// Internal modules
mod router;
