use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::relay::{Delivery, OutboundEvent, RelayError};
use crate::session::{SessionId, SessionRegistry};

/// Field added to every forwarded signal naming the sender
pub const FROM_FIELD: &str = "from";

/// Addresses `payload` from `from` to exactly one recipient
///
/// The payload is forwarded untouched apart from the `from` tag, which always
/// reflects the real sender even if the client tried to set it.
pub fn route(
    sessions: &SessionRegistry,
    from: &SessionId,
    to: Option<&SessionId>,
    mut payload: Map<String, Value>,
) -> Result<Delivery, RelayError> {
    let to = to
        .filter(|to| !to.as_str().is_empty())
        .ok_or_else(|| RelayError::malformed("signal requires a non-empty `to`"))?;

    if !sessions.contains(to) {
        warn!(
            session_id = %from,
            to = %to,
            "Signal addressed to a session that is not connected"
        );
        return Err(RelayError::UnknownRecipient(to.clone()));
    }

    payload.insert(FROM_FIELD.to_string(), Value::String(from.to_string()));
    debug!(session_id = %from, to = %to, "Routing signal");

    Ok(Delivery::to(to.clone(), OutboundEvent::Signal { payload }))
}
