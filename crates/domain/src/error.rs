//! # ドメイン層エラー定義
//!
//! 入力値の不正やカーソルの破損など、ドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 値オブジェクトの検証失敗 |
//! | `InvalidRequest` | 400 Bad Request | ページ取得リクエストの検証失敗 |
//! | `InvalidCursor` | 400 Bad Request | カーソルが解釈できない |
//! | `InvalidOrganizationId` | 400 Bad Request | 組織 ID の形式が不正 |
//!
//! ## 使用例
//!
//! ```rust
//! use folio_domain::{DomainError, cursor::Cursor};
//!
//! let err: DomainError = Cursor::decode("invalid_cursor").unwrap_err().into();
//! assert!(matches!(err, DomainError::InvalidCursor(_)));
//! ```

use thiserror::Error;

use crate::cursor::CursorError;

/// ドメイン層で発生するエラー
///
/// ユースケース層でこのエラーを受け取り、サービスのエラー種別に変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// 値オブジェクトのバリデーションエラー
    ///
    /// フォルダ名が空、ID が nil など、エンティティの不変条件に違反した場合。
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// ページ取得リクエストが不正
    ///
    /// `limit` が 0 以下の場合など。カーソルのデコードより先に判定される。
    #[error("リクエストが不正です: {0}")]
    InvalidRequest(String),

    /// カーソルが解釈できない
    ///
    /// エンコード不正と形式不正の区別は [`CursorError`] に残し、
    /// 呼び出し元には単一の「不正なカーソル」として報告する。
    #[error("カーソルが不正です")]
    InvalidCursor(#[from] CursorError),

    /// 組織 ID の形式が不正
    #[error("組織 ID が不正です: {0}")]
    InvalidOrganizationId(String),
}
