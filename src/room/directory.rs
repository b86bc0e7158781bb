use std::collections::HashMap;
use tracing::debug;

use super::types::{JoinOutcome, LeaveOutcome, RoomName};
use crate::session::SessionId;

/// Room name -> members in join order
///
/// Rooms appear on first join and disappear when their last member leaves,
/// so every room present has at least one member.
#[derive(Debug, Default)]
pub struct RoomDirectory {
    rooms: HashMap<RoomName, Vec<SessionId>>,
}

impl RoomDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `session` to `room`, creating the room if needed
    ///
    /// Does not look at other rooms: the caller is responsible for removing
    /// the session from any previous room first.
    pub fn join(&mut self, room: RoomName, session: SessionId) -> JoinOutcome {
        if self
            .rooms
            .get(&room)
            .is_some_and(|members| members.contains(&session))
        {
            return JoinOutcome::AlreadyMember {
                existing: self.members_except(&room, &session),
            };
        }

        let members = self.rooms.entry(room).or_default();
        let existing = members.clone();
        members.push(session);
        JoinOutcome::Joined { existing }
    }

    pub fn leave(&mut self, room: &RoomName, session: &SessionId) -> LeaveOutcome {
        let Some(members) = self.rooms.get_mut(room) else {
            return LeaveOutcome::NotMember;
        };

        let Some(position) = members.iter().position(|m| m == session) else {
            return LeaveOutcome::NotMember;
        };
        members.remove(position);

        if members.is_empty() {
            debug!(room = %room, "Room is now empty, deleting");
            self.rooms.remove(room);
            return LeaveOutcome::RoomDeleted;
        }

        LeaveOutcome::Left {
            remaining: members.clone(),
        }
    }

    pub fn members_except(&self, room: &RoomName, session: &SessionId) -> Vec<SessionId> {
        self.rooms
            .get(room)
            .map(|members| members.iter().filter(|m| *m != session).cloned().collect())
            .unwrap_or_default()
    }

    pub fn members(&self, room: &RoomName) -> Option<&[SessionId]> {
        self.rooms.get(room).map(Vec::as_slice)
    }

    pub fn contains(&self, room: &RoomName) -> bool {
        self.rooms.contains_key(room)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn rooms(&self) -> impl Iterator<Item = &RoomName> {
        self.rooms.keys()
    }
}
