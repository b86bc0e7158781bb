use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::errors::RelayError;
use super::events::{Delivery, InboundEvent, OutboundEvent, RelayStats};
use crate::presence;
use crate::room::{RoomDirectory, RoomName};
use crate::session::{SessionId, SessionRegistry};
use crate::signal;
use crate::websockets::ConnectionManager;

/// Membership state, only ever touched while the relay lock is held
#[derive(Debug, Default)]
struct RelayState {
    sessions: SessionRegistry,
    rooms: RoomDirectory,
}

impl RelayState {
    /// Applies one event and returns what must be delivered, in order
    fn apply(
        &mut self,
        session: &SessionId,
        event: InboundEvent,
    ) -> Result<Vec<Delivery>, RelayError> {
        match event {
            InboundEvent::Connect => {
                self.sessions.register(session.clone())?;
                Ok(vec![Delivery::to(
                    session.clone(),
                    OutboundEvent::Connected {
                        id: session.clone(),
                    },
                )])
            }
            InboundEvent::Join { room } => self.join(session, room),
            InboundEvent::Leave => {
                let Some(room) = self.sessions.set_room(session, None)? else {
                    debug!(session_id = %session, "Leave requested outside of any room");
                    return Ok(Vec::new());
                };
                Ok(self.leave_room(session, &room))
            }
            InboundEvent::Signal { to, payload } => {
                if !self.sessions.contains(session) {
                    return Err(RelayError::UnknownSession(session.clone()));
                }
                let delivery = signal::route(&self.sessions, session, to.as_ref(), payload)?;
                Ok(vec![delivery])
            }
            InboundEvent::Disconnect => {
                let room = self.sessions.unregister(session)?;
                Ok(room
                    .map(|room| self.leave_room(session, &room))
                    .unwrap_or_default())
            }
        }
    }

    fn join(&mut self, session: &SessionId, room: RoomName) -> Result<Vec<Delivery>, RelayError> {
        let previous = self.sessions.set_room(session, Some(room.clone()))?;

        let mut deliveries = Vec::new();
        if let Some(previous) = previous.filter(|previous| *previous != room) {
            info!(
                session_id = %session,
                from_room = %previous,
                to_room = %room,
                "Switching rooms"
            );
            deliveries.extend(self.leave_room(session, &previous));
        }

        let outcome = self.rooms.join(room.clone(), session.clone());
        info!(
            session_id = %session,
            room = %room,
            existing = outcome.existing().len(),
            new_member = outcome.changed_membership(),
            "Session joined room"
        );
        deliveries.extend(presence::joined(session, &outcome));
        Ok(deliveries)
    }

    fn leave_room(&mut self, session: &SessionId, room: &RoomName) -> Vec<Delivery> {
        let outcome = self.rooms.leave(room, session);
        info!(session_id = %session, room = %room, outcome = ?outcome, "Session left room");
        presence::left(session, &outcome)
    }
}

/// The routing entry point shared by every connection handler
///
/// All state changes go through one lock, and the deliveries produced by a
/// change are handed to the connection manager before the lock is released.
/// That keeps join snapshots and their notifications atomic, and keeps
/// per-room notification order equal to the order changes were applied.
pub struct Relay {
    state: Mutex<RelayState>,
    connections: Arc<dyn ConnectionManager>,
    rejected_events: AtomicU64,
}

impl Relay {
    pub fn new(connections: Arc<dyn ConnectionManager>) -> Self {
        Self {
            state: Mutex::new(RelayState::default()),
            connections,
            rejected_events: AtomicU64::new(0),
        }
    }

    /// Applies one inbound event for `session`
    ///
    /// A rejected event is logged, counted and (for client mistakes) answered
    /// with an `error` frame before the error is returned.
    #[instrument(skip_all, fields(session_id = %session, event = event.kind()))]
    pub async fn dispatch(&self, session: &SessionId, event: InboundEvent) -> Result<(), RelayError> {
        let mut state = self.state.lock().await;
        let result = state.apply(session, event);

        match result {
            Ok(deliveries) => {
                self.deliver(deliveries).await;
                Ok(())
            }
            Err(err) => {
                drop(state);
                self.report(session, &err).await;
                Err(err)
            }
        }
    }

    /// Records a rejected event that never reached the state machine
    pub async fn report(&self, session: &SessionId, err: &RelayError) {
        self.rejected_events.fetch_add(1, Ordering::Relaxed);
        warn!(session_id = %session, error = %err, "Rejected inbound event");

        if err.is_client_facing() {
            self.connections
                .send_to_session(
                    session,
                    &OutboundEvent::Error {
                        message: err.to_string(),
                    },
                )
                .await;
        }
    }

    async fn deliver(&self, deliveries: Vec<Delivery>) {
        for delivery in deliveries {
            match delivery.recipients.as_slice() {
                [] => {}
                [recipient] => {
                    self.connections
                        .send_to_session(recipient, &delivery.event)
                        .await
                }
                recipients => {
                    self.connections
                        .send_to_sessions(recipients, &delivery.event)
                        .await
                }
            }
        }
    }

    pub async fn room_of(&self, session: &SessionId) -> Option<RoomName> {
        let state = self.state.lock().await;
        state.sessions.room_of(session).ok().flatten().cloned()
    }

    pub async fn room_members(&self, room: &RoomName) -> Option<Vec<SessionId>> {
        let state = self.state.lock().await;
        state.rooms.members(room).map(|members| members.to_vec())
    }

    /// Names of every room that currently has members, sorted
    pub async fn room_names(&self) -> Vec<RoomName> {
        let state = self.state.lock().await;
        let mut names: Vec<RoomName> = state.rooms.rooms().cloned().collect();
        names.sort();
        names
    }

    pub async fn stats(&self) -> RelayStats {
        let state = self.state.lock().await;
        RelayStats {
            sessions: state.sessions.len(),
            rooms: state.rooms.room_count(),
            rejected_events: self.rejected_events.load(Ordering::Relaxed),
        }
    }
}
