//! # Folder Service エラー定義
//!
//! フォルダ取得で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! すべてのエラーはそれを生んだ呼び出しに対して終端的で、部分的な結果は返さない。
//! 再試行するかどうかは呼び出し側の方針に委ねる。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_domain::{DomainError, cursor::CursorError};
use folio_infra::{InfraError, InfraErrorKind};
use folio_shared::ErrorResponse;
use thiserror::Error;

/// Folder Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
    /// 不正なリクエスト（limit が 0 以下など）
    #[error("不正なリクエスト: {0}")]
    InvalidRequest(String),

    /// カーソルが解釈できない
    ///
    /// エンコード不正・形式不正の区別は `source` にのみ残る。
    /// 呼び出し側は同じカーソルで再試行せず、破棄する必要がある。
    #[error("カーソルが不正です")]
    InvalidCursor(#[source] CursorError),

    /// 組織 ID が不正（形式不正または nil）
    #[error("組織 ID が不正です: {0}")]
    InvalidOrganizationId(String),

    /// 組織にフォルダが存在しない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 上記に分類できないインフラ層のエラー
    #[error("インフラエラー: {0}")]
    Internal(#[source] InfraError),
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) | DomainError::InvalidRequest(msg) => {
                Self::InvalidRequest(msg)
            }
            DomainError::InvalidCursor(source) => Self::InvalidCursor(source),
            DomainError::InvalidOrganizationId(msg) => Self::InvalidOrganizationId(msg),
        }
    }
}

impl From<CursorError> for CoreError {
    fn from(err: CursorError) -> Self {
        Self::InvalidCursor(err)
    }
}

impl From<InfraError> for CoreError {
    fn from(err: InfraError) -> Self {
        match err.kind() {
            InfraErrorKind::NotFound(msg) => Self::NotFound(msg.clone()),
            InfraErrorKind::InvalidOrganizationId(msg) => Self::InvalidOrganizationId(msg.clone()),
            _ => Self::Internal(err),
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let body = match &self {
            CoreError::InvalidRequest(msg) => ErrorResponse::bad_request(msg.clone()),
            CoreError::InvalidCursor(source) => {
                tracing::debug!(error = %source, "カーソルのデコードに失敗しました");
                ErrorResponse::new(
                    "invalid-cursor",
                    "Invalid Cursor",
                    400,
                    "カーソルが不正です。先頭ページから取得し直してください",
                )
            }
            CoreError::InvalidOrganizationId(msg) => {
                ErrorResponse::new("invalid-organization-id", "Invalid Organization ID", 400, msg.clone())
            }
            CoreError::NotFound(msg) => ErrorResponse::not_found(msg.clone()),
            CoreError::Internal(e) => {
                tracing::error!(
                    error.kind = "infrastructure",
                    span_trace = %e.span_trace(),
                    "インフラエラー: {}",
                    e
                );
                ErrorResponse::internal_error()
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use folio_domain::cursor::Cursor;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::エンコード不正("invalid_cursor")]
    #[case::形式不正("invalidToken")]
    fn test_カーソルエラーは種類によらずinvalid_cursorになる(#[case] token: &str) {
        let domain_err: DomainError = Cursor::decode(token).unwrap_err().into();

        let sut = CoreError::from(domain_err);

        assert!(matches!(sut, CoreError::InvalidCursor(_)));
        assert_eq!(sut.to_string(), "カーソルが不正です");
    }

    #[test]
    fn test_infraのnot_foundはnot_foundに変換される() {
        let sut = CoreError::from(InfraError::not_found("org"));

        assert!(matches!(sut, CoreError::NotFound(msg) if msg == "org"));
    }

    #[test]
    fn test_infraのinvalid_organization_idはinvalid_organization_idに変換される() {
        let sut = CoreError::from(InfraError::invalid_organization_id("nil"));

        assert!(matches!(sut, CoreError::InvalidOrganizationId(_)));
    }

    #[test]
    fn test_その他のinfraエラーはinternalに変換される() {
        let sut = CoreError::from(InfraError::invalid_fixture("broken"));

        assert!(matches!(sut, CoreError::Internal(_)));
    }

    #[rstest]
    #[case(CoreError::InvalidRequest("limit".to_string()), StatusCode::BAD_REQUEST)]
    #[case(CoreError::InvalidOrganizationId("x".to_string()), StatusCode::BAD_REQUEST)]
    #[case(CoreError::NotFound("x".to_string()), StatusCode::NOT_FOUND)]
    #[case(CoreError::Internal(InfraError::invalid_fixture("x")), StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_into_responseでステータスコードが対応する(
        #[case] error: CoreError,
        #[case] expected: StatusCode,
    ) {
        let response = error.into_response();

        assert_eq!(response.status(), expected);
    }
}
