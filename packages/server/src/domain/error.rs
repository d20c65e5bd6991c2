//! Error types for domain value object construction.

use thiserror::Error;

/// Domain-level validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Participant name must not be empty
    #[error("participant name must not be empty")]
    EmptyParticipantName,

    /// Message text must not be empty
    #[error("message text must not be empty")]
    EmptyMessageText,
}
