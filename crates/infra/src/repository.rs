//! # リポジトリ
//!
//! - **依存性逆転**: ユースケースはトレイトにのみ依存する
//! - **テスタビリティ**: トレイト経由でスタブ・モックに差し替え可能

pub mod folder_repository;

pub use folder_repository::{
    DEFAULT_ORGANIZATION_ID,
    FolderRepository,
    InMemoryFolderRepository,
};
