//! # Folio 共有ユーティリティ
//!
//! Folio の全クレートから利用される共通型とユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, folder-service）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - トランスポート（axum など）には依存しない

pub mod api_response;
pub mod error_response;
pub mod health;
pub mod observability;
pub mod paginated_response;

pub use api_response::ApiResponse;
pub use error_response::ErrorResponse;
pub use health::HealthResponse;
pub use paginated_response::PaginatedResponse;
