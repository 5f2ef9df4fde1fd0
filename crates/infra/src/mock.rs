//! # テスト用モックリポジトリ
//!
//! ユースケーステストで使用するインメモリモック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! folio-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
    Arc,
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use folio_domain::{folder::Folder, organization::OrganizationId};

use crate::{error::InfraError, repository::FolderRepository};

/// モックに返させる失敗の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    NotFound,
    InvalidOrganizationId,
    InvalidFixture,
}

// ===== MockFolderRepository =====

/// 呼び出し回数を記録するフォルダリポジトリ
///
/// 検索前に処理が打ち切られること（バリデーションの優先順位）を検証するために使う。
#[derive(Clone, Default)]
pub struct MockFolderRepository {
    folders: Arc<Mutex<Vec<Folder>>>,
    failure: Arc<Mutex<Option<MockFailure>>>,
    calls:   Arc<AtomicUsize>,
}

impl MockFolderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_folders(folders: Vec<Folder>) -> Self {
        Self {
            folders: Arc::new(Mutex::new(folders)),
            ..Self::default()
        }
    }

    /// 以降の呼び出しを常に失敗させる
    pub fn fail_with(&self, failure: MockFailure) {
        *self.failure.lock().unwrap() = Some(failure);
    }

    /// `find_all_by_organization` が呼ばれた回数
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FolderRepository for MockFolderRepository {
    async fn find_all_by_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<Folder>, InfraError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if organization_id.is_nil() {
            return Err(InfraError::invalid_organization_id(
                "nil の組織 ID は使用できません",
            ));
        }

        if let Some(failure) = *self.failure.lock().unwrap() {
            return Err(match failure {
                MockFailure::NotFound => InfraError::not_found(organization_id.to_string()),
                MockFailure::InvalidOrganizationId => {
                    InfraError::invalid_organization_id(organization_id.to_string())
                }
                MockFailure::InvalidFixture => InfraError::invalid_fixture("mock"),
            });
        }

        let folders: Vec<Folder> = self
            .folders
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.belongs_to(organization_id))
            .cloned()
            .collect();

        if folders.is_empty() {
            return Err(InfraError::not_found(organization_id.to_string()));
        }
        Ok(folders)
    }
}

#[cfg(test)]
mod tests {
    use folio_domain::folder::{FolderId, FolderName};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::InfraErrorKind;

    fn folder(organization_id: OrganizationId, name: &str) -> Folder {
        Folder::new(FolderId::new(), organization_id, FolderName::new(name).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_with_foldersで渡したフォルダを組織ごとに返す() {
        let org = OrganizationId::new();
        let other = OrganizationId::new();
        let folders = vec![folder(org, "a"), folder(other, "b"), folder(org, "c")];
        let sut = MockFolderRepository::with_folders(folders.clone());

        let result = sut.find_all_by_organization(&org).await.unwrap();

        assert_eq!(result, vec![folders[0].clone(), folders[2].clone()]);
        assert_eq!(sut.call_count(), 1);
    }

    #[tokio::test]
    async fn test_fail_with設定後は失敗を返す() {
        let org = OrganizationId::new();
        let sut = MockFolderRepository::with_folders(vec![folder(org, "a")]);
        sut.fail_with(MockFailure::InvalidFixture);

        let result = sut.find_all_by_organization(&org).await;

        assert!(matches!(
            result.unwrap_err().kind(),
            InfraErrorKind::InvalidFixture(_)
        ));
    }
}
