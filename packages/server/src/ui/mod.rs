//! HTTP surface and background drivers.

pub mod handler;
pub mod reaper;
pub mod server;
pub mod signal;
pub mod state;
pub mod validation;

pub use reaper::InactivityReaper;
pub use server::Server;
pub use state::AppState;
