//! # ルーター構築
//!
//! Folder Service の全ルートを 1 つの [`Router`] にまとめる。
//! `main` と統合テストの両方から同じ構成で呼び出す。

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handler::{FolderState, get_folder_page, health_check, list_folders};

/// アプリケーションのルーターを構築する
pub fn build_app(folder_state: Arc<FolderState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/internal/folders", get(list_folders))
        .route("/internal/folders/page", get(get_folder_page))
        .with_state(folder_state)
        .layer(TraceLayer::new_for_http())
}
