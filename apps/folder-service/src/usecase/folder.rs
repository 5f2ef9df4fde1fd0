//! フォルダ取得ユースケース
//!
//! 組織のフォルダ一覧をそのまま、またはカーソルで区切ったページとして返す。

use std::sync::Arc;

use folio_domain::{
    cursor::Cursor,
    folder::Folder,
    organization::OrganizationId,
    pagination::{PageLimit, paginate},
};
use folio_infra::repository::FolderRepository;

use crate::error::CoreError;

/// 全件取得の入力
#[derive(Debug, Clone)]
pub struct FetchFolderRequest {
    pub organization_id: OrganizationId,
}

/// 全件取得の出力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFolderResponse {
    pub folders: Vec<Folder>,
}

/// ページ取得の入力
///
/// - `limit`: 1 以上。0 以下は `InvalidRequest`
/// - `cursor`: 空文字列は先頭ページを意味する
#[derive(Debug, Clone)]
pub struct PaginatedFetchRequest {
    pub organization_id: OrganizationId,
    pub limit:           i64,
    pub cursor:          String,
}

/// ページ取得の出力
///
/// `next_cursor` が空文字列なら最終ページ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedFetchResponse {
    pub folders:     Vec<Folder>,
    pub next_cursor: String,
}

/// フォルダ取得ユースケース
pub struct FolderUseCaseImpl {
    folder_repository: Arc<dyn FolderRepository>,
}

impl FolderUseCaseImpl {
    pub fn new(folder_repository: Arc<dyn FolderRepository>) -> Self {
        Self { folder_repository }
    }

    /// 組織のフォルダをすべて取得する（ストアの順序のまま）
    #[tracing::instrument(skip_all, fields(organization_id = %request.organization_id))]
    pub async fn get_all(
        &self,
        request: FetchFolderRequest,
    ) -> Result<FetchFolderResponse, CoreError> {
        let folders = self
            .folder_repository
            .find_all_by_organization(&request.organization_id)
            .await?;

        tracing::debug!(count = folders.len(), "フォルダ一覧を取得しました");
        Ok(FetchFolderResponse { folders })
    }

    /// 組織のフォルダを 1 ページ分取得する
    ///
    /// 1. `limit` のバリデーション
    /// 2. カーソルのデコード
    /// 3. 候補列の取得
    /// 4. ページの切り出しと次カーソルの計算
    ///
    /// 1・2 で失敗した場合はリポジトリを呼ばない。
    #[tracing::instrument(
        skip_all,
        fields(organization_id = %request.organization_id, limit = request.limit)
    )]
    pub async fn get_page(
        &self,
        request: PaginatedFetchRequest,
    ) -> Result<PaginatedFetchResponse, CoreError> {
        let limit = PageLimit::new(request.limit)?;
        let start = Cursor::decode(&request.cursor)?;

        let folders = self
            .folder_repository
            .find_all_by_organization(&request.organization_id)
            .await?;
        let total = folders.len();

        let page = paginate(folders, start, limit);
        let next_cursor = page.next_cursor_token();

        tracing::debug!(
            offset = start.offset(),
            total,
            returned = page.items.len(),
            last_page = page.is_last(),
            "フォルダのページを取得しました"
        );

        Ok(PaginatedFetchResponse {
            folders: page.items,
            next_cursor,
        })
    }
}
