//! UseCase: 参加者一覧取得処理

use std::sync::Arc;

use crate::domain::{Participant, ParticipantRepository, RepositoryError};

/// 参加者一覧取得のユースケース
pub struct ListParticipantsUseCase {
    /// Participant Repository（データアクセス層の抽象化）
    participants: Arc<dyn ParticipantRepository>,
}

impl ListParticipantsUseCase {
    /// 新しい ListParticipantsUseCase を作成
    pub fn new(participants: Arc<dyn ParticipantRepository>) -> Self {
        Self { participants }
    }

    /// 全ての参加者をストアの自然順で取得
    pub async fn execute(&self) -> Result<Vec<Participant>, RepositoryError> {
        self.participants.find_all().await
    }
}
