//! Shared utilities for the Idobata group chat backend.
//!
//! Cross-cutting concerns used by the server and its tests:
//! logging setup and time utilities.

pub mod logger;
pub mod time;
