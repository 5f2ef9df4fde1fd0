//! # フォルダ
//!
//! 組織が所有するフォルダのドメインモデル。
//!
//! フォルダのライフサイクル（作成・永続化）は外部のストアが担い、
//! このクレートは読み取り専用の値として扱う。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use folio_domain::{
//!     folder::{Folder, FolderId, FolderName},
//!     organization::OrganizationId,
//! };
//!
//! let folder = Folder::new(
//!     FolderId::new(),
//!     OrganizationId::new(),
//!     FolderName::new("経費精算")?,
//! )?;
//!
//! assert_eq!(folder.name().as_str(), "経費精算");
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::{DomainError, organization::OrganizationId};

define_uuid_id! {
    /// フォルダの一意識別子
    pub struct FolderId;
}

// =========================================================================
// FolderName（フォルダ名）
// =========================================================================

/// フォルダ名の最大文字数
const MAX_FOLDER_NAME_LENGTH: usize = 255;

/// フォルダ名（値オブジェクト）
///
/// # 不変条件
///
/// - 空文字列ではない（前後の空白はトリミング）
/// - 最大 255 文字
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("{_0}")]
pub struct FolderName(String);

impl FolderName {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "フォルダ名を入力してください".to_string(),
            ));
        }

        if value.chars().count() > MAX_FOLDER_NAME_LENGTH {
            return Err(DomainError::Validation(
                "フォルダ名は 255 文字以内で入力してください".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =========================================================================
// Folder（フォルダエンティティ）
// =========================================================================

/// フォルダエンティティ
///
/// # 不変条件
///
/// - `id` は nil ではない
/// - `name` は空ではない（[`FolderName`] が保証）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    id:              FolderId,
    organization_id: OrganizationId,
    name:            FolderName,
}

impl Folder {
    pub fn new(
        id: FolderId,
        organization_id: OrganizationId,
        name: FolderName,
    ) -> Result<Self, DomainError> {
        if id.is_nil() {
            return Err(DomainError::Validation(
                "フォルダ ID に nil は使用できません".to_string(),
            ));
        }

        Ok(Self {
            id,
            organization_id,
            name,
        })
    }

    pub fn id(&self) -> &FolderId {
        &self.id
    }

    pub fn organization_id(&self) -> &OrganizationId {
        &self.organization_id
    }

    pub fn name(&self) -> &FolderName {
        &self.name
    }

    /// 指定した組織に属するかどうか
    pub fn belongs_to(&self, organization_id: &OrganizationId) -> bool {
        &self.organization_id == organization_id
    }
}
