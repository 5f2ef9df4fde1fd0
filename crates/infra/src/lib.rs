//! # Folio インフラ層
//!
//! フォルダを保持するストアとの接続を担当する。
//!
//! ## 設計方針
//!
//! ページネーションはフォルダの検索を [`FolderRepository`] トレイト越しにのみ利用する。
//! 同梱の [`InMemoryFolderRepository`] はサンプルデータを返す差し替え可能な実装であり、
//! 永続ストアに置き換えてもユースケース側は変更不要。
//!
//! ## 依存関係
//!
//! ```text
//! folder-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - フォルダ検索のトレイトとインメモリ実装
//! - `mock` - テスト用モック（`test-utils` feature）

pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
pub use repository::{FolderRepository, InMemoryFolderRepository};
