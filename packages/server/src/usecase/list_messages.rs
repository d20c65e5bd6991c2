//! UseCase: メッセージ一覧取得処理
//!
//! 閲覧者から見えるメッセージを挿入順で最大 limit 件返します。
//! これは可視性フィルタであり、ページネーションではありません：
//! 継続トークンはなく、同じ limit でも呼び出しごとに結果は変わり得ます。

use std::sync::Arc;

use crate::domain::{Message, MessageRepository, ParticipantName, RepositoryError};

/// メッセージ一覧取得のユースケース
pub struct ListMessagesUseCase {
    /// Message Repository（データアクセス層の抽象化）
    messages: Arc<dyn MessageRepository>,
}

impl ListMessagesUseCase {
    /// 新しい ListMessagesUseCase を作成
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    /// メッセージ一覧取得を実行
    ///
    /// # Arguments
    ///
    /// * `viewer` - クレームされた閲覧者名（`None` は匿名閲覧者）
    /// * `limit` - 返す件数の上限（正の整数であることは HTTP 境界で検証済み）
    pub async fn execute(
        &self,
        viewer: Option<&ParticipantName>,
        limit: usize,
    ) -> Result<Vec<Message>, RepositoryError> {
        self.messages.find_visible_to(viewer, limit).await
    }
}
