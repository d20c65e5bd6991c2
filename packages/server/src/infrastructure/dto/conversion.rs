//! Conversion logic between domain entities and HTTP DTOs.

use idobata_shared::time::millis_to_clock_time;

use crate::domain::{Message, Participant};
use crate::infrastructure::dto::http as dto;

// ========================================
// Domain Entity → DTO
// ========================================

impl From<Participant> for dto::ParticipantDto {
    fn from(model: Participant) -> Self {
        Self {
            id: model.id.to_string(),
            name: model.name.as_str().to_string(),
            last_status: model.last_status.value(),
        }
    }
}

impl From<Message> for dto::MessageDto {
    fn from(model: Message) -> Self {
        Self {
            id: model.id.to_string(),
            from: model.from.as_str().to_string(),
            to: model.to.as_str().to_string(),
            text: model.text.as_str().to_string(),
            kind: model.kind,
            time: millis_to_clock_time(model.time.value()),
        }
    }
}
