//! # ページネーション付きレスポンス
//!
//! カーソルベースのページネーションに対応した API レスポンス型。

use serde::{Deserialize, Serialize};

/// ページネーション付きレスポンス
///
/// `ApiResponse<T>` が単一データ用であるのに対し、
/// `PaginatedResponse<T>` はリスト + カーソルのページネーション形式。
///
/// ## JSON 形式
///
/// ```json
/// {
///   "data": [...],
///   "next_cursor": "bmV4dCBjdXJzb3I6NQ=="
/// }
/// ```
///
/// `next_cursor` が空文字列の場合は最後のページを意味する。
/// 以前に発行したトークンとの互換性のため `null` は使わない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data:        Vec<T>,
    pub next_cursor: String,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, next_cursor: impl Into<String>) -> Self {
        Self {
            data,
            next_cursor: next_cursor.into(),
        }
    }

    /// 後続ページが存在しない（最終ページ）かどうか
    pub fn is_last_page(&self) -> bool {
        self.next_cursor.is_empty()
    }
}
