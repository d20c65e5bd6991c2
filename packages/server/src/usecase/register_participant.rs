//! UseCase: 参加者登録処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RegisterParticipantUseCase::execute() メソッド
//! - 参加者の登録処理（重複チェック、参加者挿入、入室イベント追記）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：名前の一意性を登録時に強制する
//! - 登録と入室 status イベントが 1 つの論理操作として実行されることを確認
//! - ストア障害時にエラーが正しく伝播することを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加者の登録
//! - 異常系：重複した名前での登録試行
//! - 異常系：ストア操作の失敗

use std::sync::Arc;

use idobata_shared::time::Clock;

use crate::domain::{
    Message, MessageRepository, Participant, ParticipantName, ParticipantRepository, Timestamp,
};

use super::error::RegisterError;

/// 参加者登録のユースケース
pub struct RegisterParticipantUseCase {
    /// Participant Repository（データアクセス層の抽象化）
    participants: Arc<dyn ParticipantRepository>,
    /// Message Repository（status イベントの追記先）
    messages: Arc<dyn MessageRepository>,
    /// Clock（時刻取得の抽象化）
    clock: Arc<dyn Clock>,
}

impl RegisterParticipantUseCase {
    /// 新しい RegisterParticipantUseCase を作成
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            participants,
            messages,
            clock,
        }
    }

    /// 参加者登録を実行
    ///
    /// # Arguments
    ///
    /// * `name` - 登録する参加者名（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 登録成功
    /// * `Err(RegisterError)` - 登録失敗
    pub async fn execute(&self, name: ParticipantName) -> Result<(), RegisterError> {
        // 1. 重複チェック
        //    存在チェックと挿入は別々のストア操作のため、同名の同時登録は
        //    両方ともチェックを通過し得る（一意性はベストエフォート）
        if self.participants.find_by_name(&name).await?.is_some() {
            return Err(RegisterError::NameTaken(name.as_str().to_string()));
        }

        // 2. 参加者を挿入
        let now = Timestamp::new(self.clock.now_millis());
        self.participants
            .insert(Participant::new(name.clone(), now))
            .await?;

        // 3. 入室 status イベントを追記
        //    2 と 3 はトランザクションではない：3 が失敗すると入室イベントの
        //    ない参加者が残る
        self.messages.append(Message::joined(name, now)).await?;

        Ok(())
    }
}
