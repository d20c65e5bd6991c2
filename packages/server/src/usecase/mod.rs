//! UseCase 層
//!
//! 1 操作 = 1 ユースケース。各ユースケースは Repository trait（および
//! 時刻が関わる場合は Clock）への Arc を保持し、HTTP ハンドラと
//! Inactivity Reaper から呼び出されます。

mod error;
mod heartbeat;
mod list_messages;
mod list_participants;
mod post_message;
mod reap_inactive;
mod register_participant;

pub use error::{HeartbeatError, PostMessageError, RegisterError};
pub use heartbeat::HeartbeatUseCase;
pub use list_messages::ListMessagesUseCase;
pub use list_participants::ListParticipantsUseCase;
pub use post_message::PostMessageUseCase;
pub use reap_inactive::ReapInactiveUseCase;
pub use register_participant::RegisterParticipantUseCase;
