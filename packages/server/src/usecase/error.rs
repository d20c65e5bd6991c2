//! UseCase 層のエラー型定義

use thiserror::Error;

use crate::domain::RepositoryError;

/// 参加者登録のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    /// 同名の参加者が既に登録されている
    #[error("participant '{0}' already exists")]
    NameTaken(String),

    /// ストア操作の失敗
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

/// 生存通知（ハートビート）のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeartbeatError {
    /// 名前に一致する参加者が存在しない
    #[error("participant '{0}' is not registered")]
    UnknownParticipant(String),

    /// ストア操作の失敗
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

/// メッセージ投稿のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PostMessageError {
    /// 送信者が参加者として登録されていない
    #[error("sender '{0}' is not registered")]
    UnknownSender(String),

    /// ストア操作の失敗
    #[error(transparent)]
    Store(#[from] RepositoryError),
}
