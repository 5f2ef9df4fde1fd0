//! # ページネーション
//!
//! 順序付きの候補列から 1 ページ分を切り出し、次ページのカーソルを決める。
//!
//! ## 境界の計算
//!
//! ```text
//! end  = min(start + limit, total)
//! page = items[start..end]            （start >= total なら空）
//! next = end == total ? なし : Cursor(end)
//! ```
//!
//! `start >= total` はエラーではなく、空の最終ページとして扱う。
//! 候補列の順序は呼び出し元（フォルダの検索）が決めたものをそのまま保つ。

use std::num::NonZeroUsize;

use crate::{DomainError, cursor::Cursor};

/// 1 ページあたりの取得件数（値オブジェクト）
///
/// # 不変条件
///
/// - 1 以上
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimit(NonZeroUsize);

impl PageLimit {
    /// リクエストされた件数から `PageLimit` を作成する
    ///
    /// # エラー
    ///
    /// 0 以下の場合は `DomainError::InvalidRequest` を返す。
    pub fn new(value: i64) -> Result<Self, DomainError> {
        usize::try_from(value)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or_else(|| {
                DomainError::InvalidRequest(format!(
                    "limit は 1 以上である必要があります: {value}"
                ))
            })
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// 切り出した 1 ページ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// 候補列の順序を保ったページ内の要素
    pub items:       Vec<T>,
    /// 次ページの開始位置（最終ページなら `None`）
    pub next_cursor: Option<Cursor>,
}

impl<T> Page<T> {
    /// レスポンスに載せる次カーソルのトークン
    ///
    /// 最終ページでは番兵の空文字列を返す。
    pub fn next_cursor_token(&self) -> String {
        self.next_cursor
            .map(|cursor| cursor.encode())
            .unwrap_or_default()
    }

    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }
}

/// 候補列から `start` 以降の最大 `limit` 件を切り出す
///
/// `start + limit` のオーバーフローは飽和させる（デコード済みカーソルは
/// `usize::MAX` までを取りうるため）。
pub fn paginate<T>(items: Vec<T>, start: Cursor, limit: PageLimit) -> Page<T> {
    let total = items.len();
    let start = start.offset();
    let end = start.saturating_add(limit.get()).min(total);

    let next_cursor = (end < total).then_some(Cursor::new(end));

    let items = if start >= end {
        Vec::new()
    } else {
        items.into_iter().skip(start).take(end - start).collect()
    };

    Page { items, next_cursor }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn limit(value: i64) -> PageLimit {
        PageLimit::new(value).unwrap()
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i64::MIN)]
    fn test_page_limitは0以下を拒否する(#[case] value: i64) {
        assert!(matches!(
            PageLimit::new(value),
            Err(DomainError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_page_limitは1以上を受け入れる() {
        assert_eq!(limit(1).get(), 1);
        assert_eq!(limit(100).get(), 100);
    }

    #[test]
    fn test_12件をlimit5で順に取得すると5件_5件_2件になる() {
        let items: Vec<usize> = (0..12).collect();

        let first = paginate(items.clone(), Cursor::START, limit(5));
        assert_eq!(first.items, vec![0, 1, 2, 3, 4]);
        assert_eq!(first.next_cursor, Some(Cursor::new(5)));

        let second = paginate(items.clone(), Cursor::new(5), limit(5));
        assert_eq!(second.items, vec![5, 6, 7, 8, 9]);
        assert_eq!(second.next_cursor, Some(Cursor::new(10)));

        let third = paginate(items, Cursor::new(10), limit(5));
        assert_eq!(third.items, vec![10, 11]);
        assert_eq!(third.next_cursor, None);
        assert_eq!(third.next_cursor_token(), "");
    }

    #[test]
    fn test_末尾3件手前から取得すると残り3件で終端になる() {
        let items: Vec<usize> = (0..10).collect();

        let sut = paginate(items, Cursor::new(7), limit(5));

        assert_eq!(sut.items, vec![7, 8, 9]);
        assert!(sut.is_last());
    }

    #[test]
    fn test_件数がlimitで割り切れる場合は最終ページが満杯で終端になる() {
        let items: Vec<usize> = (0..10).collect();

        let sut = paginate(items, Cursor::new(5), limit(5));

        assert_eq!(sut.items, vec![5, 6, 7, 8, 9]);
        assert!(sut.is_last());
    }

    #[rstest]
    #[case(10)]
    #[case(11)]
    #[case(usize::MAX)]
    fn test_開始位置が件数以上なら空の最終ページを返す(#[case] start: usize) {
        let items: Vec<usize> = (0..10).collect();

        let sut = paginate(items, Cursor::new(start), limit(5));

        assert!(sut.items.is_empty());
        assert_eq!(sut.next_cursor_token(), "");
    }

    #[test]
    fn test_空の候補列は空の最終ページになる() {
        let sut = paginate(Vec::<usize>::new(), Cursor::START, limit(3));

        assert!(sut.items.is_empty());
        assert!(sut.is_last());
    }

    #[test]
    fn test_次カーソルのトークンはエンコード済み文字列になる() {
        let items: Vec<usize> = (0..12).collect();

        let sut = paginate(items, Cursor::START, limit(5));

        assert_eq!(sut.next_cursor_token(), Cursor::new(5).encode());
    }

    #[rstest]
    fn test_どのlimitでも全ページを連結すると元の列に一致する(
        #[values(1, 2, 3, 4, 5, 7, 11, 12, 13, 100)] limit_value: i64,
    ) {
        let items: Vec<usize> = (0..12).collect();
        let mut collected = Vec::new();
        let mut cursor = Cursor::START;
        let mut pages = 0;

        loop {
            let page = paginate(items.clone(), cursor, limit(limit_value));
            pages += 1;
            collected.extend(page.items);
            match page.next_cursor {
                Some(next) => cursor = next,
                None => break,
            }
        }

        assert_eq!(collected, items);
        assert_eq!(pages, items.len().div_ceil(limit_value as usize));
    }
}
