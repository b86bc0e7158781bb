use std::collections::HashMap;
use tracing::debug;

use super::types::SessionId;
use crate::relay::RelayError;
use crate::room::RoomName;

/// Live sessions and the single room each one currently belongs to
///
/// The registry is the authority on which sessions exist. A session that has
/// been unregistered is gone for good; every later lookup reports
/// [`RelayError::UnknownSession`].
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, Option<RoomName>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a session that is not yet in any room
    pub fn register(&mut self, session: SessionId) -> Result<(), RelayError> {
        if self.sessions.contains_key(&session) {
            return Err(RelayError::DuplicateSession(session));
        }

        debug!(session_id = %session, "Session registered");
        self.sessions.insert(session, None);
        Ok(())
    }

    /// Removes a session, returning the room it was in at the time
    pub fn unregister(&mut self, session: &SessionId) -> Result<Option<RoomName>, RelayError> {
        let room = self
            .sessions
            .remove(session)
            .ok_or_else(|| RelayError::UnknownSession(session.clone()))?;

        debug!(session_id = %session, room = ?room, "Session unregistered");
        Ok(room)
    }

    pub fn room_of(&self, session: &SessionId) -> Result<Option<&RoomName>, RelayError> {
        self.sessions
            .get(session)
            .map(Option::as_ref)
            .ok_or_else(|| RelayError::UnknownSession(session.clone()))
    }

    /// Records a membership change, returning the previous room
    pub fn set_room(
        &mut self,
        session: &SessionId,
        room: Option<RoomName>,
    ) -> Result<Option<RoomName>, RelayError> {
        let slot = self
            .sessions
            .get_mut(session)
            .ok_or_else(|| RelayError::UnknownSession(session.clone()))?;

        Ok(std::mem::replace(slot, room))
    }

    pub fn contains(&self, session: &SessionId) -> bool {
        self.sessions.contains_key(session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
