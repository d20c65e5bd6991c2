//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;
use uuid::Uuid;

use super::{Message, Participant, ParticipantName, Timestamp};

/// ストア操作の失敗
///
/// 下層のドキュメントストアへの操作が失敗した場合に返されるエラー。
/// 呼び出し側はストアのメッセージをそのまま 500 応答に載せます。
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// ストアへの操作が失敗した
    #[error("store operation failed: {0}")]
    Unavailable(String),
}

/// Participant Repository trait
///
/// `participants` コレクションへの find / insert / update / delete
/// 操作のインターフェース。UseCase 層はこの trait に依存し、
/// Infrastructure 層の具体的な実装には依存しない。
///
/// ## 依存性の逆転（DIP）
///
/// - ドメイン層が必要とするインターフェースをドメイン層自身が定義
/// - Infrastructure 層がドメイン層のインターフェースに依存
/// - ドメイン層は Infrastructure 層に依存しない
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// 参加者を追加
    async fn insert(&self, participant: Participant) -> Result<(), RepositoryError>;

    /// 名前で参加者を検索
    async fn find_by_name(
        &self,
        name: &ParticipantName,
    ) -> Result<Option<Participant>, RepositoryError>;

    /// 全ての参加者を取得（ストアの自然順）
    async fn find_all(&self) -> Result<Vec<Participant>, RepositoryError>;

    /// 名前が一致する参加者の last_status を更新
    ///
    /// フィルタ付き更新を 1 回のストア操作として発行し、
    /// 一致する参加者が存在したかどうかを返す。
    async fn update_last_status(
        &self,
        name: &ParticipantName,
        last_status: Timestamp,
    ) -> Result<bool, RepositoryError>;

    /// `cutoff` より古い last_status を持つ参加者を取得
    async fn find_inactive_since(
        &self,
        cutoff: Timestamp,
    ) -> Result<Vec<Participant>, RepositoryError>;

    /// ドキュメント ID で参加者を削除（削除が行われたかどうかを返す）
    async fn delete_by_id(&self, id: &Uuid) -> Result<bool, RepositoryError>;
}

/// Message Repository trait
///
/// `messages` コレクションへのインターフェース。メッセージは追記専用で、
/// 挿入後に変更・削除されることはない。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// メッセージを追加
    async fn append(&self, message: Message) -> Result<(), RepositoryError>;

    /// `viewer` から見えるメッセージを挿入順で最大 `limit` 件取得
    ///
    /// `viewer` が `None` の場合（クレーム付き識別子なし）は
    /// プライベートメッセージ以外のみが対象になる。
    async fn find_visible_to<'a>(
        &self,
        viewer: Option<&'a ParticipantName>,
        limit: usize,
    ) -> Result<Vec<Message>, RepositoryError>;
}
