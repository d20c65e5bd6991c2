//! UseCase: 生存通知（ハートビート）処理
//!
//! 参加者の last_status を現在時刻へ更新します。検索と更新を分けず、
//! フィルタ付き更新 1 回で「存在すれば更新」を行うため、Reaper の削除と
//! 競合しても更新が中途半端に残ることはありません。

use std::sync::Arc;

use idobata_shared::time::Clock;

use crate::domain::{ParticipantName, ParticipantRepository, Timestamp};

use super::error::HeartbeatError;

/// 生存通知のユースケース
pub struct HeartbeatUseCase {
    /// Participant Repository（データアクセス層の抽象化）
    participants: Arc<dyn ParticipantRepository>,
    /// Clock（時刻取得の抽象化）
    clock: Arc<dyn Clock>,
}

impl HeartbeatUseCase {
    /// 新しい HeartbeatUseCase を作成
    pub fn new(participants: Arc<dyn ParticipantRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            participants,
            clock,
        }
    }

    /// 生存通知を実行
    ///
    /// # Arguments
    ///
    /// * `name` - クレームされた参加者名（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(())` - last_status を更新した
    /// * `Err(HeartbeatError)` - 参加者が存在しない、またはストア障害
    pub async fn execute(&self, name: ParticipantName) -> Result<(), HeartbeatError> {
        let now = Timestamp::new(self.clock.now_millis());
        let matched = self.participants.update_last_status(&name, now).await?;
        if !matched {
            return Err(HeartbeatError::UnknownParticipant(
                name.as_str().to_string(),
            ));
        }
        Ok(())
    }
}
