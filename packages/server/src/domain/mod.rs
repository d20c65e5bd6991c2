//! ドメイン層
//!
//! チャットのエンティティ（参加者・メッセージ）、値オブジェクト、
//! およびデータアクセスのインターフェース（Repository trait）を定義します。

mod error;
mod message;
mod participant;
mod repository;

pub use error::DomainError;
pub use message::{
    BROADCAST_RECIPIENT, JOINED_TEXT, LEFT_TEXT, Message, MessageKind, MessageText,
};
pub use participant::{Participant, ParticipantName, Timestamp};
pub use repository::{MessageRepository, ParticipantRepository, RepositoryError};

#[cfg(test)]
pub use repository::{MockMessageRepository, MockParticipantRepository};
