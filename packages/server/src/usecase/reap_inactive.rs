//! UseCase: 非アクティブ参加者の掃除（1 スイープ分）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ReapInactiveUseCase::execute() メソッド
//! - 閾値より古い last_status を持つ参加者の退去処理
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：退去は 1 回だけ行われ、退室イベントも 1 件だけ
//! - 新鮮な参加者が誤って退去させられないことを確認
//! - 1 参加者の失敗が残りの掃除を止めないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：閾値超過の参加者の退去と退室イベント追記
//! - エッジケース：対象なし、スイープの冪等性
//! - 異常系：一部参加者の削除失敗、ストア全体の障害

use std::sync::Arc;
use std::time::Duration;

use idobata_shared::time::Clock;

use crate::domain::{
    Message, MessageRepository, Participant, ParticipantRepository, RepositoryError, Timestamp,
};

/// 非アクティブ参加者掃除のユースケース
///
/// 1 回の execute() が 1 スイープに対応する。周期的な起動は
/// [`crate::ui::InactivityReaper`] が担う。
pub struct ReapInactiveUseCase {
    /// Participant Repository（データアクセス層の抽象化）
    participants: Arc<dyn ParticipantRepository>,
    /// Message Repository（退室 status イベントの追記先）
    messages: Arc<dyn MessageRepository>,
    /// Clock（時刻取得の抽象化）
    clock: Arc<dyn Clock>,
    /// 非アクティブと判定するまでの猶予
    inactivity_threshold: Duration,
}

impl ReapInactiveUseCase {
    /// 新しい ReapInactiveUseCase を作成
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
        inactivity_threshold: Duration,
    ) -> Self {
        Self {
            participants,
            messages,
            clock,
            inactivity_threshold,
        }
    }

    /// 1 スイープを実行し、退去させた参加者数を返す
    ///
    /// 対象の選定に失敗した場合はエラーを返す。個々の参加者の退去失敗は
    /// ログに残して読み飛ばし、残りの参加者の処理を続行する。
    pub async fn execute(&self) -> Result<usize, RepositoryError> {
        let cutoff = Timestamp::new(
            self.clock.now_millis() - self.inactivity_threshold.as_millis() as i64,
        );
        let stale = self.participants.find_inactive_since(cutoff).await?;

        let mut evicted = 0;
        for participant in stale {
            if let Err(e) = self.evict(&participant).await {
                tracing::warn!(
                    "Failed to evict inactive participant '{}': {}",
                    participant.name,
                    e
                );
                continue;
            }
            tracing::info!("Evicted inactive participant '{}'", participant.name);
            evicted += 1;
        }

        Ok(evicted)
    }

    /// 退室 status イベントを追記してから参加者を削除する。
    ///
    /// 2 操作はトランザクションではない：追記と削除の間に割り込んだ
    /// Heartbeat は削除とともに失われ得る。
    async fn evict(&self, participant: &Participant) -> Result<(), RepositoryError> {
        let now = Timestamp::new(self.clock.now_millis());
        self.messages
            .append(Message::left(participant.name.clone(), now))
            .await?;
        self.participants.delete_by_id(&participant.id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        BROADCAST_RECIPIENT, LEFT_TEXT, MessageKind, MockMessageRepository,
        MockParticipantRepository, ParticipantName,
    };
    use crate::infrastructure::repository::InMemoryChatStore;
    use idobata_shared::time::FixedClock;

    fn name(s: &str) -> ParticipantName {
        ParticipantName::new(s.to_string()).unwrap()
    }

    fn create_usecase(
        store: Arc<InMemoryChatStore>,
        now_millis: i64,
        threshold: Duration,
    ) -> ReapInactiveUseCase {
        ReapInactiveUseCase::new(
            store.clone(),
            store,
            Arc::new(FixedClock::new(now_millis)),
            threshold,
        )
    }

    #[tokio::test]
    async fn test_reap_evicts_stale_participant_exactly_once() {
        // テスト項目: 閾値超過の参加者が 1 回だけ退去し、退室イベントも 1 件だけ
        // given (前提条件): last_status = 0、現在時刻 20000ms、閾値 10s
        let store = Arc::new(InMemoryChatStore::new());
        store
            .insert(Participant::new(name("mayfly"), Timestamp::new(0)))
            .await
            .unwrap();
        let usecase = create_usecase(store.clone(), 20_000, Duration::from_secs(10));

        // when (操作):
        let first = usecase.execute().await.unwrap();
        let second = usecase.execute().await.unwrap();

        // then (期待する結果): 2 回目のスイープでは何も起きない
        assert_eq!(first, 1);
        assert_eq!(second, 0);
        assert_eq!(store.find_all().await.unwrap().len(), 0);

        let messages = store.find_visible_to(None, 10).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].from.as_str(), "mayfly");
        assert_eq!(messages[0].to.as_str(), BROADCAST_RECIPIENT);
        assert_eq!(messages[0].text.as_str(), LEFT_TEXT);
        assert_eq!(messages[0].kind, MessageKind::Status);
    }

    #[tokio::test]
    async fn test_reap_keeps_fresh_participant() {
        // テスト項目: 閾値内の参加者は退去させられない
        // given (前提条件): last_status = 15000ms、現在時刻 20000ms、閾値 10s
        let store = Arc::new(InMemoryChatStore::new());
        store
            .insert(Participant::new(name("alice"), Timestamp::new(15_000)))
            .await
            .unwrap();
        let usecase = create_usecase(store.clone(), 20_000, Duration::from_secs(10));

        // when (操作):
        let evicted = usecase.execute().await.unwrap();

        // then (期待する結果):
        assert_eq!(evicted, 0);
        assert_eq!(store.find_all().await.unwrap().len(), 1);
        assert_eq!(store.find_visible_to(None, 10).await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_reap_continues_after_single_eviction_failure() {
        // テスト項目: 1 参加者の削除失敗が残りの参加者の掃除を止めない
        // given (前提条件): 2 人が対象、最初の 1 人だけ削除が失敗する
        let stale1 = Participant::new(name("first"), Timestamp::new(0));
        let stale2 = Participant::new(name("second"), Timestamp::new(0));
        let failing_id = stale1.id;

        let mut participants = MockParticipantRepository::new();
        let stale_clone = vec![stale1, stale2];
        participants
            .expect_find_inactive_since()
            .returning(move |_| Ok(stale_clone.clone()));
        participants.expect_delete_by_id().returning(move |id| {
            if *id == failing_id {
                Err(RepositoryError::Unavailable("write conflict".to_string()))
            } else {
                Ok(true)
            }
        });

        let mut messages = MockMessageRepository::new();
        messages.expect_append().times(2).returning(|_| Ok(()));

        let usecase = ReapInactiveUseCase::new(
            Arc::new(participants),
            Arc::new(messages),
            Arc::new(FixedClock::new(20_000)),
            Duration::from_secs(10),
        );

        // when (操作):
        let evicted = usecase.execute().await.unwrap();

        // then (期待する結果): 失敗した 1 人を除いて退去が完了する
        assert_eq!(evicted, 1);
    }

    #[tokio::test]
    async fn test_reap_propagates_query_failure() {
        // テスト項目: 対象選定のストア障害はエラーとして返される
        // given (前提条件):
        let mut participants = MockParticipantRepository::new();
        participants
            .expect_find_inactive_since()
            .returning(|_| Err(RepositoryError::Unavailable("store down".to_string())));
        let messages = MockMessageRepository::new();

        let usecase = ReapInactiveUseCase::new(
            Arc::new(participants),
            Arc::new(messages),
            Arc::new(FixedClock::new(20_000)),
            Duration::from_secs(10),
        );

        // when (操作):
        let result = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RepositoryError::Unavailable("store down".to_string()))
        );
    }
}
