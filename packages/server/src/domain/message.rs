//! Message entity: immutable chat and system event records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::DomainError;
use super::participant::{ParticipantName, Timestamp};

/// Reserved recipient value meaning "all participants".
///
/// The stock web frontend renders this literal (and the join/leave texts
/// below) directly, so they are part of the wire contract.
pub const BROADCAST_RECIPIENT: &str = "Todos";

/// Text of the system event appended when a participant registers
pub const JOINED_TEXT: &str = "entra na sala...";

/// Text of the system event appended when a participant is evicted
pub const LEFT_TEXT: &str = "sai da sala...";

/// Message type variants.
///
/// Only `Message` and `PrivateMessage` are client-settable;
/// `Status` events are generated by the server on join and eviction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Message,
    PrivateMessage,
    Status,
}

/// Validated message text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageText(String);

impl MessageText {
    /// Create a new MessageText, rejecting empty strings
    pub fn new(text: String) -> Result<Self, DomainError> {
        if text.is_empty() {
            return Err(DomainError::EmptyMessageText);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An immutable chat or system event record with routing fields.
///
/// Messages are append-only: once inserted they are never mutated or
/// deleted by this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Document id assigned by this service
    pub id: Uuid,
    /// Sender name (claimed identity for posts, evicted name for status events)
    pub from: ParticipantName,
    /// Recipient name, or [`BROADCAST_RECIPIENT`]
    pub to: ParticipantName,
    /// Message body
    pub text: MessageText,
    /// Type variant
    pub kind: MessageKind,
    /// Insertion timestamp
    pub time: Timestamp,
}

impl Message {
    /// Create a new message with a fresh document id
    pub fn new(
        from: ParticipantName,
        to: ParticipantName,
        text: MessageText,
        kind: MessageKind,
        time: Timestamp,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            from,
            to,
            text,
            kind,
            time,
        }
    }

    /// Build the broadcast status event announcing that `name` joined
    pub fn joined(name: ParticipantName, time: Timestamp) -> Self {
        Self::status(name, JOINED_TEXT, time)
    }

    /// Build the broadcast status event announcing that `name` left
    pub fn left(name: ParticipantName, time: Timestamp) -> Self {
        Self::status(name, LEFT_TEXT, time)
    }

    fn status(name: ParticipantName, text: &str, time: Timestamp) -> Self {
        Self::new(
            name,
            ParticipantName::new(BROADCAST_RECIPIENT.to_string())
                .expect("broadcast recipient is a valid name"),
            MessageText::new(text.to_string()).expect("status text is non-empty"),
            MessageKind::Status,
            time,
        )
    }

    /// Visibility rule for message listing.
    ///
    /// Everything is visible except a private message that is neither
    /// addressed to nor sent by the viewer. An anonymous viewer (no claimed
    /// identity) sees only non-private traffic.
    pub fn is_visible_to(&self, viewer: Option<&ParticipantName>) -> bool {
        if self.kind != MessageKind::PrivateMessage {
            return true;
        }
        match viewer {
            Some(name) => &self.to == name || &self.from == name,
            None => false,
        }
    }
}
