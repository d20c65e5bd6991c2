//! UseCase: メッセージ投稿処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PostMessageUseCase::execute() メソッド
//! - メッセージ投稿処理（送信者の存在チェック、メッセージ追記）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：未登録の送信者からの投稿を拒否する
//! - メッセージが投稿時点のタイムスタンプ付きで追記されることを確認
//! - ストア障害時にエラーが正しく伝播することを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：公開メッセージとプライベートメッセージの投稿
//! - 異常系：未登録の送信者による投稿試行
//! - 異常系：ストア操作の失敗

use std::sync::Arc;

use idobata_shared::time::Clock;

use crate::domain::{
    Message, MessageKind, MessageRepository, MessageText, ParticipantName, ParticipantRepository,
    Timestamp,
};

use super::error::PostMessageError;

/// メッセージ投稿のユースケース
pub struct PostMessageUseCase {
    /// Participant Repository（送信者の存在チェックに使用）
    participants: Arc<dyn ParticipantRepository>,
    /// Message Repository（データアクセス層の抽象化）
    messages: Arc<dyn MessageRepository>,
    /// Clock（時刻取得の抽象化）
    clock: Arc<dyn Clock>,
}

impl PostMessageUseCase {
    /// 新しい PostMessageUseCase を作成
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

    /// メッセージ投稿を実行
    ///
    /// # Arguments
    ///
    /// * `from` - クレームされた送信者名（per-request のヘッダ値、未認証）
    /// * `to` - 宛先の参加者名、または Todos
    /// * `text` - メッセージ本文（Domain Model）
    /// * `kind` - メッセージ種別（検証層で message / private_message に限定済み）
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 投稿成功
    /// * `Err(PostMessageError)` - 投稿失敗
    pub async fn execute(
        &self,
        from: ParticipantName,
        to: ParticipantName,
        text: MessageText,
        kind: MessageKind,
    ) -> Result<(), PostMessageError> {
        // 1. 送信者の存在チェック
        if self.participants.find_by_name(&from).await?.is_none() {
            return Err(PostMessageError::UnknownSender(from.as_str().to_string()));
        }

        // 2. 投稿時点のタイムスタンプでメッセージを追記
        let now = Timestamp::new(self.clock.now_millis());
        self.messages
            .append(Message::new(from, to, text, kind, now))
            .await?;

        Ok(())
    }
}
