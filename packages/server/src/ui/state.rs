//! Server state shared across request handlers.

use std::sync::Arc;

use crate::usecase::{
    HeartbeatUseCase, ListMessagesUseCase, ListParticipantsUseCase, PostMessageUseCase,
    RegisterParticipantUseCase,
};

/// Shared application state
pub struct AppState {
    /// RegisterParticipantUseCase（参加者登録のユースケース）
    pub register_participant_usecase: Arc<RegisterParticipantUseCase>,
    /// ListParticipantsUseCase（参加者一覧取得のユースケース）
    pub list_participants_usecase: Arc<ListParticipantsUseCase>,
    /// PostMessageUseCase（メッセージ投稿のユースケース）
    pub post_message_usecase: Arc<PostMessageUseCase>,
    /// ListMessagesUseCase（メッセージ一覧取得のユースケース）
    pub list_messages_usecase: Arc<ListMessagesUseCase>,
    /// HeartbeatUseCase（生存通知のユースケース）
    pub heartbeat_usecase: Arc<HeartbeatUseCase>,
}
