//! # Folder Service
//!
//! 組織ごとのフォルダ一覧を、不透明なカーソルで区切って返す内部サービス。
//!
//! ## モジュール構成
//!
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - エラーと HTTP レスポンスへの変換
//! - [`usecase`] - フォルダ取得のユースケース
//! - [`handler`] - HTTP ハンドラ
//! - [`app_builder`] - ルーター構築

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
