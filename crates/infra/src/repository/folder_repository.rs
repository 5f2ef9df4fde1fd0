//! # FolderRepository
//!
//! 組織に属するフォルダを検索するリポジトリ。
//!
//! ## 契約
//!
//! - 同じ組織 ID に対する呼び出しは、同じ順序・同じ要素の列を返す
//!   （ページをまたいだ境界計算が安定するための前提）
//! - 1 件もなければ `NotFound`、nil の組織 ID は `InvalidOrganizationId`
//! - 読み取り専用で、並行呼び出しに対して安全
//!
//! ## 実装
//!
//! [`InMemoryFolderRepository`] は JSON フィクスチャから読み込んだフォルダを返す。
//! 組み込みのサンプルデータ（`fixtures/sample_folders.json`）は
//! [`DEFAULT_ORGANIZATION_ID`] に 12 件、ほか 2 組織に 10 件と 3 件を持つ。

use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use folio_domain::{
    folder::{Folder, FolderId, FolderName},
    organization::OrganizationId,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::InfraError;

/// サンプルデータで最も多くのフォルダを持つ組織
pub const DEFAULT_ORGANIZATION_ID: &str = "c1556e17-b7c0-45a3-a6ae-9546248fb17a";

/// 組み込みのサンプルデータ
const SAMPLE_FOLDERS_JSON: &str = include_str!("../../fixtures/sample_folders.json");

/// フォルダ検索トレイト
#[async_trait]
pub trait FolderRepository: Send + Sync {
    /// 組織に属する全フォルダをストアの順序で取得する
    async fn find_all_by_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<Folder>, InfraError>;
}

/// フィクスチャ 1 件分のレコード
#[derive(Debug, Deserialize)]
struct FolderRecord {
    id:     Uuid,
    org_id: Uuid,
    name:   String,
}

impl TryFrom<FolderRecord> for Folder {
    type Error = InfraError;

    fn try_from(record: FolderRecord) -> Result<Self, Self::Error> {
        let name = FolderName::new(record.name)
            .map_err(|e| InfraError::invalid_fixture(format!("{}: {e}", record.id)))?;
        Folder::new(
            FolderId::from_uuid(record.id),
            OrganizationId::from_uuid(record.org_id),
            name,
        )
        .map_err(|e| InfraError::invalid_fixture(format!("{}: {e}", record.id)))
    }
}

/// インメモリ実装の FolderRepository
///
/// 構築後は不変のため、ロックなしで並行に読み取れる。
#[derive(Debug, Clone)]
pub struct InMemoryFolderRepository {
    folders: Arc<Vec<Folder>>,
}

impl InMemoryFolderRepository {
    /// 与えられた順序のままフォルダを保持する
    pub fn new(folders: Vec<Folder>) -> Self {
        Self {
            folders: Arc::new(folders),
        }
    }

    /// `[{ "id", "org_id", "name" }]` 形式の JSON から作成する
    pub fn from_json(json: &str) -> Result<Self, InfraError> {
        let records: Vec<FolderRecord> = serde_json::from_str(json)?;
        let folders = records
            .into_iter()
            .map(Folder::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(folders))
    }

    /// JSON フィクスチャファイルから作成する
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InfraError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// 組み込みのサンプルデータから作成する
    pub fn with_sample_data() -> Result<Self, InfraError> {
        Self::from_json(SAMPLE_FOLDERS_JSON)
    }

    /// 保持しているフォルダの総数（全組織）
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

#[async_trait]
impl FolderRepository for InMemoryFolderRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(%organization_id))]
    async fn find_all_by_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<Folder>, InfraError> {
        if organization_id.is_nil() {
            return Err(InfraError::invalid_organization_id(
                "nil の組織 ID は使用できません",
            ));
        }

        let folders: Vec<Folder> = self
            .folders
            .iter()
            .filter(|folder| folder.belongs_to(organization_id))
            .cloned()
            .collect();

        if folders.is_empty() {
            return Err(InfraError::not_found(format!(
                "組織 {organization_id} に属するフォルダはありません"
            )));
        }

        tracing::debug!(count = folders.len(), "フォルダを取得しました");
        Ok(folders)
    }
}
