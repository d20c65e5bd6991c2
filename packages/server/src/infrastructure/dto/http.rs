//! HTTP API response DTOs.

use serde::Serialize;

use crate::domain::MessageKind;

/// Stored participant record as returned by `GET /participants`.
///
/// Collections are returned raw, including the internal document id.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "lastStatus")]
    pub last_status: i64,
}

/// Stored message record as returned by `GET /messages`
#[derive(Debug, Clone, Serialize)]
pub struct MessageDto {
    pub id: String,
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Local wall-clock time of insertion (`HH:mm:ss`)
    pub time: String,
}
