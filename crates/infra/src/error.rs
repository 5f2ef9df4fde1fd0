//! # インフラ層エラー定義
//!
//! フォルダの検索やフィクスチャの読み込みで発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別
//!
//! `From` 実装や convenience constructor でエラーを生成すると、
//! その時点のスパン情報（呼び出し経路）が自動的に記録される。

use std::{error::Error as StdError, fmt};

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別に応じた処理には [`kind()`](InfraError::kind) を使用する:
///
/// ```ignore
/// match error.kind() {
///     InfraErrorKind::NotFound(_) => { /* 404 */ }
///     _ => { /* その他 */ }
/// }
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// 組織に属するフォルダが 1 件もない
    ///
    /// 空の組織に対する正常な結果であり、障害ではない。
    #[error("フォルダが見つかりません: {0}")]
    NotFound(String),

    /// 組織 ID が検索に使えない（nil など）
    #[error("組織 ID が不正です: {0}")]
    InvalidOrganizationId(String),

    /// フィクスチャの JSON が読めない
    #[error("シリアライズエラー: {0}")]
    Serialization(#[source] serde_json::Error),

    /// フィクスチャの内容がドメインの不変条件を満たさない
    #[error("フィクスチャが不正です: {0}")]
    InvalidFixture(String),

    /// フィクスチャファイルの読み込み失敗
    #[error("I/O エラー: {0}")]
    Io(#[source] std::io::Error),
}

// ===== InfraError のメソッド =====

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    // ===== Convenience constructors =====

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::capture(InfraErrorKind::NotFound(msg.into()))
    }

    pub fn invalid_organization_id(msg: impl Into<String>) -> Self {
        Self::capture(InfraErrorKind::InvalidOrganizationId(msg.into()))
    }

    pub fn invalid_fixture(msg: impl Into<String>) -> Self {
        Self::capture(InfraErrorKind::InvalidFixture(msg.into()))
    }

    fn capture(kind: InfraErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }
}

// ===== トレイト実装 =====

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl StdError for InfraError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.kind.source()
    }
}

// ===== From 実装（SpanTrace 自動キャプチャ） =====

impl From<serde_json::Error> for InfraError {
    fn from(source: serde_json::Error) -> Self {
        Self::capture(InfraErrorKind::Serialization(source))
    }
}

impl From<std::io::Error> for InfraError {
    fn from(source: std::io::Error) -> Self {
        Self::capture(InfraErrorKind::Io(source))
    }
}
