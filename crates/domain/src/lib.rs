//! # Folio ドメイン層
//!
//! 組織ごとのフォルダ一覧と、そのカーソルページネーションの中核を定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! folder-service → infra → domain
//! ```
//!
//! ドメイン層は外部ストアにも HTTP にも依存しない。ここにある処理はすべて同期的で、
//! 呼び出しをまたいで共有される可変状態を持たない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`organization`] - 組織（フォルダの所有者）の識別子
//! - [`folder`] - フォルダエンティティ
//! - [`cursor`] - オフセットと不透明トークンの相互変換
//! - [`pagination`] - ページ範囲と次カーソルの計算
//!
//! ## 使用例
//!
//! ```rust
//! use folio_domain::{
//!     cursor::Cursor,
//!     pagination::{PageLimit, paginate},
//! };
//!
//! let items: Vec<u32> = (0..12).collect();
//! let limit = PageLimit::new(5).unwrap();
//!
//! let page = paginate(items, Cursor::START, limit);
//! assert_eq!(page.items, vec![0, 1, 2, 3, 4]);
//! assert_eq!(page.next_cursor, Some(Cursor::new(5)));
//! ```

#[macro_use]
mod macros;

pub mod cursor;
pub mod error;
pub mod folder;
pub mod organization;
pub mod pagination;

pub use error::DomainError;
