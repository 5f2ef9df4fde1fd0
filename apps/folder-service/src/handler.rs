//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、ロジックはユースケースに委譲する

pub mod folder;
pub mod health;

pub use folder::{FolderState, get_folder_page, list_folders};
pub use health::health_check;
