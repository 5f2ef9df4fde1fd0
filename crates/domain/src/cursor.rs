//! # カーソル
//!
//! 結果列へのオフセットと、リクエスト境界を越えて受け渡す不透明トークンとの
//! 相互変換を提供する。
//!
//! ## トークン形式
//!
//! UTF-8 文字列 `next cursor:<10 進整数>` を base64（標準アルファベット、
//! パディングあり）でエンコードしたもの。過去に発行したトークンとの互換性のため、
//! この形式はビット単位で固定する。
//!
//! ```text
//! offset 5  →  "next cursor:5"  →  "bmV4dCBjdXJzb3I6NQ=="
//! ```
//!
//! 空文字列はエンコード結果ではなく予約済みの番兵で、リクエストでは「先頭から」、
//! レスポンスでは「これ以上ページがない」を意味する。
//!
//! カーソルは組織や件数の情報を持たない。発行元と同じ (組織, limit) の
//! 問い合わせに対してのみ意味を持ち、別の問い合わせに渡すと無関係な位置を指す。

use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use thiserror::Error;

/// トークン本文の先頭に付くタグ
const CURSOR_TAG: &str = "next cursor";

/// タグとオフセットの区切り文字
const SEPARATOR: char = ':';

/// カーソルのデコードエラー
///
/// 2 種類の区別は診断用であり、呼び出し元には
/// [`DomainError::InvalidCursor`](crate::DomainError::InvalidCursor) として一括で報告される。
#[derive(Debug, Error)]
pub enum CursorError {
    /// base64 として解釈できない
    #[error("カーソルの base64 デコードに失敗しました: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    /// デコード結果が `next cursor:<整数>` の形をしていない
    #[error("カーソルの形式が不正です: {0}")]
    InvalidFormat(String),
}

/// 結果列の先頭からの 0 始まりのオフセット
///
/// # 不変条件
///
/// - `Cursor::decode(&c.encode())` は常に `c` を返す
/// - 負のオフセットは表現できない
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor(usize);

impl Cursor {
    /// 先頭ページを表すカーソル（オフセット 0）
    pub const START: Self = Self(0);

    pub const fn new(offset: usize) -> Self {
        Self(offset)
    }

    pub fn offset(&self) -> usize {
        self.0
    }

    /// 不透明トークンにエンコードする
    pub fn encode(&self) -> String {
        BASE64.encode(format!("{CURSOR_TAG}{SEPARATOR}{}", self.0))
    }

    /// 不透明トークンからカーソルを復元する
    ///
    /// 空文字列は [`Cursor::START`] として扱う。
    ///
    /// # エラー
    ///
    /// - base64 として不正: [`CursorError::InvalidEncoding`]
    /// - UTF-8 でない、タグや区切り文字がない、オフセットが 10 進の非負整数でない、
    ///   `usize` に収まらない: [`CursorError::InvalidFormat`]
    pub fn decode(token: &str) -> Result<Self, CursorError> {
        if token.is_empty() {
            return Ok(Self::START);
        }

        let decoded = BASE64.decode(token)?;
        let payload = String::from_utf8(decoded)
            .map_err(|_| CursorError::InvalidFormat("UTF-8 として解釈できません".to_string()))?;

        let Some((tag, offset)) = payload.split_once(SEPARATOR) else {
            return Err(CursorError::InvalidFormat(format!(
                "区切り文字 '{SEPARATOR}' がありません"
            )));
        };

        if tag != CURSOR_TAG {
            return Err(CursorError::InvalidFormat(format!(
                "タグが一致しません: {tag:?}"
            )));
        }

        // usize::from_str は先頭の '+' を受け付けるため、数字のみであることを先に確認する
        if offset.is_empty() || !offset.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CursorError::InvalidFormat(format!(
                "オフセットが非負整数ではありません: {offset:?}"
            )));
        }

        offset
            .parse::<usize>()
            .map(Self)
            .map_err(|e| CursorError::InvalidFormat(format!("オフセットが範囲外です: {e}")))
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
