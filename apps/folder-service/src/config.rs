//! # Folder Service 設定
//!
//! 環境変数から Folder Service サーバーの設定を読み込む。

use std::{env, path::PathBuf};

use thiserror::Error;

/// 既定の待ち受けポート
const DEFAULT_PORT: u16 = 3002;

/// 設定の読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} は有効なポート番号である必要があります: {value:?}")]
    InvalidPort { name: &'static str, value: String },

    #[error("{name} を読み取れません: {source}")]
    NotUnicode {
        name:   &'static str,
        #[source]
        source: env::VarError,
    },
}

/// Folder Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderServiceConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// フォルダの JSON フィクスチャ（未設定なら組み込みのサンプルデータ）
    pub fixture_path: Option<PathBuf>,
}

impl FolderServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env::var)
    }

    /// 任意の参照関数から設定を読み込む（テストで環境変数を汚さないため）
    fn from_lookup(
        lookup: impl Fn(&'static str) -> Result<String, env::VarError>,
    ) -> Result<Self, ConfigError> {
        let var = |name: &'static str| match lookup(name) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(source) => Err(ConfigError::NotUnicode { name, source }),
        };

        let host = var("FOLDER_HOST")?.unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match var("FOLDER_PORT")? {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
                name: "FOLDER_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };
        let fixture_path = var("FOLDER_FIXTURE_PATH")?.map(PathBuf::from);

        Ok(Self {
            host,
            port,
            fixture_path,
        })
    }
}
