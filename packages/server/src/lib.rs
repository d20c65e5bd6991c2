//! Group chat backend library.
//!
//! This library provides the HTTP chat backend: participant registration,
//! public and private messages, liveness heartbeats, and a periodic
//! inactivity reaper that evicts silent participants.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
