// Public API - what other modules can use
pub use directory::RoomDirectory;
pub use handlers::{get_room, list_rooms};
pub use types::{JoinOutcome, LeaveOutcome, RoomName, RoomResponse};

// Internal modules
mod directory;
mod handlers;
mod types;
