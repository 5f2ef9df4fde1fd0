//! # Folder Service サーバー
//!
//! 組織のフォルダ一覧とカーソルページネーションを提供する内部サービス。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `FOLDER_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `FOLDER_PORT` | No | ポート番号（デフォルト: `3002`） |
//! | `FOLDER_FIXTURE_PATH` | No | フォルダの JSON フィクスチャ（未設定なら組み込みのサンプルデータ） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,folio=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p folio-folder-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use folio_folder_service::{
    app_builder::build_app,
    config::FolderServiceConfig,
    handler::FolderState,
    usecase::FolderUseCaseImpl,
};
use folio_infra::InMemoryFolderRepository;
use folio_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("folder-service");
    init_tracing(&tracing_config);
    let _tracing_guard = tracing_config.app_span().entered();

    let config = FolderServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    let repository = match &config.fixture_path {
        Some(path) => InMemoryFolderRepository::from_path(path)
            .with_context(|| format!("フィクスチャを読み込めません: {}", path.display()))?,
        None => InMemoryFolderRepository::with_sample_data()
            .context("サンプルデータを読み込めません")?,
    };
    tracing::info!(folders = repository.len(), "フォルダストアを初期化しました");

    let folder_state = Arc::new(FolderState {
        usecase: FolderUseCaseImpl::new(Arc::new(repository)),
    });
    let app = build_app(folder_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("バインドアドレスが不正です")?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Folder Service サーバーを起動します: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
