use serde::{Deserialize, Serialize};
use std::fmt;

use crate::session::SessionId;

/// Key of a room in the directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomName(String);

impl RoomName {
    /// Returns `None` for an empty name, which no client may join
    pub fn parse(name: &str) -> Option<Self> {
        if name.is_empty() {
            None
        } else {
            Some(Self(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Result of adding a session to a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// The session was added; `existing` are the members present before it
    Joined { existing: Vec<SessionId> },
    /// The session was already a member; `existing` are the other members
    AlreadyMember { existing: Vec<SessionId> },
}

impl JoinOutcome {
    pub fn existing(&self) -> &[SessionId] {
        match self {
            JoinOutcome::Joined { existing } | JoinOutcome::AlreadyMember { existing } => existing,
        }
    }

    pub fn changed_membership(&self) -> bool {
        matches!(self, JoinOutcome::Joined { .. })
    }
}

/// Result of removing a session from a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// The session was removed and the room still has these members
    Left { remaining: Vec<SessionId> },
    /// The session was the last member; the room entry was deleted
    RoomDeleted,
    /// The session was not a member of the room
    NotMember,
}

/// HTTP view of one room
#[derive(Debug, Serialize, Deserialize)]
pub struct RoomResponse {
    pub room: String,
    pub members: Vec<String>,
}
