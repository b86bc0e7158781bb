//! Presence announcements
//!
//! Turns a membership change into deliveries. The subject of a change never
//! receives its own `user-joined` or `user-left`.

use crate::relay::{Delivery, OutboundEvent};
use crate::room::{JoinOutcome, LeaveOutcome};
use crate::session::SessionId;

/// Deliveries for `joiner` entering a room
///
/// The joiner always gets `existing-users` first. Everyone already present
/// gets `user-joined`, but only when the join actually changed membership.
pub fn joined(joiner: &SessionId, outcome: &JoinOutcome) -> Vec<Delivery> {
    let existing = outcome.existing().to_vec();
    let mut deliveries = vec![Delivery::to(
        joiner.clone(),
        OutboundEvent::ExistingUsers {
            users: existing.clone(),
        },
    )];

    if outcome.changed_membership() && !existing.is_empty() {
        deliveries.push(Delivery::to_all(
            existing,
            OutboundEvent::UserJoined { id: joiner.clone() },
        ));
    }

    deliveries
}

/// Deliveries for `leaver` leaving a room
pub fn left(leaver: &SessionId, outcome: &LeaveOutcome) -> Vec<Delivery> {
    let LeaveOutcome::Left { remaining } = outcome else {
        return Vec::new();
    };

    let audience: Vec<SessionId> = remaining.iter().filter(|m| *m != leaver).cloned().collect();
    if audience.is_empty() {
        return Vec::new();
    }

    vec![Delivery::to_all(
        audience,
        OutboundEvent::UserLeft { id: leaver.clone() },
    )]
}
