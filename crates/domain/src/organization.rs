//! # 組織
//!
//! フォルダの所有者である組織の識別子。
//!
//! すべてのフォルダはちょうど 1 つの組織に属し、一覧取得・ページ取得は
//! 常に組織単位で行われる。
//!
//! ## 使用例
//!
//! ```rust
//! use folio_domain::organization::OrganizationId;
//!
//! let id = OrganizationId::parse_str("c1556e17-b7c0-45a3-a6ae-9546248fb17a").unwrap();
//! assert_eq!(id.to_string(), "c1556e17-b7c0-45a3-a6ae-9546248fb17a");
//!
//! assert!(OrganizationId::parse_str("not-a-uuid").is_err());
//! ```

use crate::DomainError;

define_uuid_id! {
    /// 組織の一意識別子
    ///
    /// nil UUID も型としては表現できるが、フォルダの検索時に拒否される。
    pub struct OrganizationId;
}

impl OrganizationId {
    /// 文字列表現の UUID から組織 ID を作成する
    ///
    /// # エラー
    ///
    /// UUID として解釈できない場合は `DomainError::InvalidOrganizationId` を返す。
    pub fn parse_str(value: &str) -> Result<Self, DomainError> {
        uuid::Uuid::parse_str(value.trim())
            .map(Self::from_uuid)
            .map_err(|e| DomainError::InvalidOrganizationId(format!("{value:?}: {e}")))
    }
}
