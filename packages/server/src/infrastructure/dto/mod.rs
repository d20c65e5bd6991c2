//! Data Transfer Objects (DTOs) for the chat backend.
//!
//! Outbound HTTP records only: inbound creation payloads arrive as untyped
//! JSON and are schema-checked by the validation layer before reaching the
//! domain.

pub mod conversion;
pub mod http;
