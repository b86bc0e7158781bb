use thiserror::Error;

use crate::session::SessionId;

/// Reasons an inbound event is rejected by the relay
///
/// None of these are fatal: the offending event is dropped and every other
/// session is unaffected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Unknown recipient: {0}")]
    UnknownRecipient(SessionId),

    #[error("Session already registered: {0}")]
    DuplicateSession(SessionId),

    #[error("Unknown session: {0}")]
    UnknownSession(SessionId),
}

impl RelayError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        RelayError::MalformedRequest(msg.into())
    }

    /// Whether the sender should be told about the rejection
    ///
    /// Registry misuse comes from the transport, not the client, so there is
    /// nobody meaningful to answer.
    pub fn is_client_facing(&self) -> bool {
        matches!(
            self,
            RelayError::MalformedRequest(_) | RelayError::UnknownRecipient(_)
        )
    }
}
