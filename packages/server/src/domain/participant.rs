//! Participant entity and related value objects.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::DomainError;

/// Validated participant name.
///
/// Names are the only identity a participant has: they are claimed, not
/// authenticated, and uniqueness is enforced at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantName(String);

impl ParticipantName {
    /// Create a new ParticipantName, rejecting empty strings
    pub fn new(name: String) -> Result<Self, DomainError> {
        if name.is_empty() {
            return Err(DomainError::EmptyParticipantName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unix timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// A named, ephemeral chat identity with a liveness timestamp.
///
/// Created on registration, refreshed by heartbeats, deleted by the
/// inactivity reaper. There are no other lifecycle transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Document id assigned by this service
    pub id: Uuid,
    /// Unique display name
    pub name: ParticipantName,
    /// Timestamp of last-known activity (registration or heartbeat)
    pub last_status: Timestamp,
}

impl Participant {
    /// Create a new participant with a fresh document id
    pub fn new(name: ParticipantName, last_status: Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            last_status,
        }
    }
}
