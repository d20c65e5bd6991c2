//! InMemory ドキュメントストア実装
//!
//! ドメイン層が定義する ParticipantRepository / MessageRepository trait の
//! 具体的な実装。`participants` と `messages` の 2 つのコレクションを
//! Mutex 配下の Vec として保持し、挿入順をストアの自然順とします。
//!
//! ## 並行性モデル
//!
//! 各メソッドは 1 つのロック区間 = 1 回のストア操作として振る舞います。
//! 単一操作は原子的ですが、複数操作の列（参加者挿入 → status メッセージ
//! 挿入など）はトランザクションではなく、リクエスト処理と Reaper の操作が
//! 任意に交錯し得ます。

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{
    Message, MessageRepository, Participant, ParticipantName, ParticipantRepository,
    RepositoryError, Timestamp,
};

/// インメモリのチャットストア
///
/// 2 つのコレクションを保持し、ドメイン層の両 Repository trait を実装します。
#[derive(Default)]
pub struct InMemoryChatStore {
    /// `participants` コレクション（挿入順）
    participants: Mutex<Vec<Participant>>,
    /// `messages` コレクション（挿入順、追記専用）
    messages: Mutex<Vec<Message>>,
}

impl InMemoryChatStore {
    /// 新しい空の InMemoryChatStore を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryChatStore {
    async fn insert(&self, participant: Participant) -> Result<(), RepositoryError> {
        let mut participants = self.participants.lock().await;
        participants.push(participant);
        Ok(())
    }

    async fn find_by_name(
        &self,
        name: &ParticipantName,
    ) -> Result<Option<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.iter().find(|p| &p.name == name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.clone())
    }

    async fn update_last_status(
        &self,
        name: &ParticipantName,
        last_status: Timestamp,
    ) -> Result<bool, RepositoryError> {
        let mut participants = self.participants.lock().await;
        match participants.iter_mut().find(|p| &p.name == name) {
            Some(participant) => {
                participant.last_status = last_status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_inactive_since(
        &self,
        cutoff: Timestamp,
    ) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants
            .iter()
            .filter(|p| p.last_status < cutoff)
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: &Uuid) -> Result<bool, RepositoryError> {
        let mut participants = self.participants.lock().await;
        match participants.iter().position(|p| &p.id == id) {
            Some(index) => {
                participants.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl MessageRepository for InMemoryChatStore {
    async fn append(&self, message: Message) -> Result<(), RepositoryError> {
        let mut messages = self.messages.lock().await;
        messages.push(message);
        Ok(())
    }

    async fn find_visible_to<'a>(
        &self,
        viewer: Option<&'a ParticipantName>,
        limit: usize,
    ) -> Result<Vec<Message>, RepositoryError> {
        let messages = self.messages.lock().await;
        Ok(messages
            .iter()
            .filter(|m| m.is_visible_to(viewer))
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageKind, MessageText};

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryChatStore の基本的な CRUD 操作
    // - 参加者コレクションの検索・更新・削除がフィルタ通りに動くこと
    // - メッセージコレクションの可視性フィルタと limit の適用
    //
    // 【なぜこのテストが必要か】
    // - ストアは UseCase から呼ばれるデータアクセス層の中核
    // - 挿入順 = 自然順という前提を Message Log の一覧取得が依存している
    // - Reaper の対象選定（find_inactive_since）の境界条件を保証する必要がある
    //
    // 【どのようなシナリオをテストするか】
    // 1. 参加者の挿入と名前検索
    // 2. last_status のフィルタ付き更新（存在しない名前は false）
    // 3. 閾値より古い参加者のみが find_inactive_since で返ること
    // 4. ID 指定の削除（冪等性）
    // 5. メッセージの可視性フィルタと limit
    // ========================================

    fn name(s: &str) -> ParticipantName {
        ParticipantName::new(s.to_string()).unwrap()
    }

    fn text(s: &str) -> MessageText {
        MessageText::new(s.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find_by_name() {
        // テスト項目: 挿入した参加者を名前で検索できる
        // given (前提条件):
        let store = InMemoryChatStore::new();
        let alice = Participant::new(name("alice"), Timestamp::new(1000));

        // when (操作):
        ParticipantRepository::insert(&store, alice.clone())
            .await
            .unwrap();

        // then (期待する結果):
        let found = store.find_by_name(&name("alice")).await.unwrap();
        assert_eq!(found, Some(alice));

        let missing = store.find_by_name(&name("bob")).await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_find_all_preserves_insertion_order() {
        // テスト項目: find_all が挿入順で全参加者を返す
        // given (前提条件):
        let store = InMemoryChatStore::new();
        for n in ["charlie", "alice", "bob"] {
            ParticipantRepository::insert(
                &store,
                Participant::new(name(n), Timestamp::new(1000)),
            )
            .await
            .unwrap();
        }

        // when (操作):
        let all = store.find_all().await.unwrap();

        // then (期待する結果): ソートされず挿入順のまま
        let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["charlie", "alice", "bob"]);
    }

    #[tokio::test]
    async fn test_update_last_status_matches_by_name() {
        // テスト項目: last_status のフィルタ付き更新が一致の有無を返す
        // given (前提条件):
        let store = InMemoryChatStore::new();
        ParticipantRepository::insert(
            &store,
            Participant::new(name("alice"), Timestamp::new(1000)),
        )
        .await
        .unwrap();

        // when (操作):
        let matched = store
            .update_last_status(&name("alice"), Timestamp::new(2000))
            .await
            .unwrap();
        let unmatched = store
            .update_last_status(&name("bob"), Timestamp::new(2000))
            .await
            .unwrap();

        // then (期待する結果):
        assert!(matched);
        assert!(!unmatched);
        let alice = store.find_by_name(&name("alice")).await.unwrap().unwrap();
        assert_eq!(alice.last_status, Timestamp::new(2000));
    }

    #[tokio::test]
    async fn test_find_inactive_since_uses_strict_cutoff() {
        // テスト項目: cutoff より厳密に古い参加者のみが返される
        // given (前提条件):
        let store = InMemoryChatStore::new();
        ParticipantRepository::insert(
            &store,
            Participant::new(name("stale"), Timestamp::new(1000)),
        )
        .await
        .unwrap();
        ParticipantRepository::insert(
            &store,
            Participant::new(name("boundary"), Timestamp::new(5000)),
        )
        .await
        .unwrap();
        ParticipantRepository::insert(
            &store,
            Participant::new(name("fresh"), Timestamp::new(9000)),
        )
        .await
        .unwrap();

        // when (操作):
        let inactive = store.find_inactive_since(Timestamp::new(5000)).await.unwrap();

        // then (期待する結果): 境界値ちょうどは含まれない
        assert_eq!(inactive.len(), 1);
        assert_eq!(inactive[0].name.as_str(), "stale");
    }

    #[tokio::test]
    async fn test_delete_by_id_is_idempotent() {
        // テスト項目: ID 指定の削除は 2 回目以降 false を返す
        // given (前提条件):
        let store = InMemoryChatStore::new();
        let alice = Participant::new(name("alice"), Timestamp::new(1000));
        let id = alice.id;
        ParticipantRepository::insert(&store, alice).await.unwrap();

        // when (操作):
        let first = store.delete_by_id(&id).await.unwrap();
        let second = store.delete_by_id(&id).await.unwrap();

        // then (期待する結果):
        assert!(first);
        assert!(!second);
        assert_eq!(store.find_all().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_find_visible_to_filters_private_messages() {
        // テスト項目: 他人宛てのプライベートメッセージが除外される
        // given (前提条件):
        let store = InMemoryChatStore::new();
        store
            .append(Message::new(
                name("alice"),
                name("bob"),
                text("para o bob"),
                MessageKind::PrivateMessage,
                Timestamp::new(1000),
            ))
            .await
            .unwrap();
        store
            .append(Message::new(
                name("alice"),
                name(crate::domain::BROADCAST_RECIPIENT),
                text("para todos"),
                MessageKind::Message,
                Timestamp::new(1001),
            ))
            .await
            .unwrap();

        // when (操作):
        let bob_view = store
            .find_visible_to(Some(&name("bob")), 10)
            .await
            .unwrap();
        let charlie_view = store
            .find_visible_to(Some(&name("charlie")), 10)
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(bob_view.len(), 2);
        assert_eq!(charlie_view.len(), 1);
        assert_eq!(charlie_view[0].text.as_str(), "para todos");
    }

    #[tokio::test]
    async fn test_find_visible_to_applies_limit_in_insertion_order() {
        // テスト項目: limit が挿入順の先頭から適用される
        // given (前提条件):
        let store = InMemoryChatStore::new();
        for i in 0..5 {
            store
                .append(Message::new(
                    name("alice"),
                    name(crate::domain::BROADCAST_RECIPIENT),
                    text(&format!("mensagem {i}")),
                    MessageKind::Message,
                    Timestamp::new(1000 + i),
                ))
                .await
                .unwrap();
        }

        // when (操作):
        let limited = store.find_visible_to(None, 3).await.unwrap();

        // then (期待する結果):
        assert_eq!(limited.len(), 3);
        assert_eq!(limited[0].text.as_str(), "mensagem 0");
        assert_eq!(limited[2].text.as_str(), "mensagem 2");
    }
}
