//! HTTP request handlers.

mod http;

pub use http::{
    get_messages, get_participants, health_check, heartbeat, post_message, register_participant,
};
