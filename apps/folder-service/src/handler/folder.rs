//! # フォルダハンドラ
//!
//! Folder Service のフォルダ取得内部 API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /internal/folders?organization_id=` - 組織のフォルダ一覧
//! - `GET /internal/folders/page?organization_id=&limit=&cursor=` - カーソルページネーション
//!
//! クエリパラメータは文字列のまま受け取り、解釈の失敗もドメインのエラーとして
//! problem details で返す。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use folio_domain::{
    DomainError,
    folder::Folder,
    organization::OrganizationId,
    pagination::PageLimit,
};
use folio_shared::{ApiResponse, PaginatedResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::CoreError,
    usecase::{FetchFolderRequest, FolderUseCaseImpl, PaginatedFetchRequest},
};

/// フォルダ API の共有状態
pub struct FolderState {
    pub usecase: FolderUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 組織 ID クエリパラメータ
#[derive(Debug, Deserialize)]
pub struct FolderOrganizationQuery {
    pub organization_id: Option<String>,
}

/// ページ取得のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct FolderPageQuery {
    pub organization_id: Option<String>,
    pub limit:           Option<String>,
    pub cursor:          Option<String>,
}

/// フォルダ DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FolderDto {
    pub id:              Uuid,
    pub organization_id: Uuid,
    pub name:            String,
}

impl From<&Folder> for FolderDto {
    fn from(folder: &Folder) -> Self {
        Self {
            id:              *folder.id().as_uuid(),
            organization_id: *folder.organization_id().as_uuid(),
            name:            folder.name().as_str().to_string(),
        }
    }
}

fn parse_organization_id(value: Option<&str>) -> Result<OrganizationId, DomainError> {
    OrganizationId::parse_str(value.unwrap_or_default())
}

/// `limit` を解釈し、1 以上であることまで検証する
///
/// limit の不正は組織 ID・カーソルの不正より優先して報告する。
fn parse_limit(value: Option<&str>) -> Result<i64, DomainError> {
    let value =
        value.ok_or_else(|| DomainError::InvalidRequest("limit は必須です".to_string()))?;
    let limit: i64 = value.trim().parse().map_err(|_| {
        DomainError::InvalidRequest(format!("limit は整数である必要があります: {value}"))
    })?;
    PageLimit::new(limit)?;
    Ok(limit)
}

// --- ハンドラ ---

/// GET /internal/folders
///
/// 組織のフォルダ一覧をストアの順序で取得する。
///
/// ## レスポンス
///
/// - `200 OK`: フォルダ一覧
/// - `400 Bad Request`: 組織 ID が不正
/// - `404 Not Found`: 組織にフォルダが存在しない
#[tracing::instrument(skip_all)]
pub async fn list_folders(
    State(state): State<Arc<FolderState>>,
    Query(query): Query<FolderOrganizationQuery>,
) -> Result<impl IntoResponse, CoreError> {
    let organization_id = parse_organization_id(query.organization_id.as_deref())?;

    let result = state
        .usecase
        .get_all(FetchFolderRequest { organization_id })
        .await?;

    let items: Vec<FolderDto> = result.folders.iter().map(FolderDto::from).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(items))))
}

/// GET /internal/folders/page
///
/// 組織のフォルダを 1 ページ分取得する。`cursor` を省略すると先頭ページ。
///
/// ## レスポンス
///
/// - `200 OK`: ページと次カーソル（最終ページなら空文字列）
/// - `400 Bad Request`: limit・カーソル・組織 ID が不正
/// - `404 Not Found`: 組織にフォルダが存在しない
#[tracing::instrument(skip_all)]
pub async fn get_folder_page(
    State(state): State<Arc<FolderState>>,
    Query(query): Query<FolderPageQuery>,
) -> Result<impl IntoResponse, CoreError> {
    let limit = parse_limit(query.limit.as_deref())?;
    let organization_id = parse_organization_id(query.organization_id.as_deref())?;

    let result = state
        .usecase
        .get_page(PaginatedFetchRequest {
            organization_id,
            limit,
            cursor: query.cursor.unwrap_or_default(),
        })
        .await?;

    let items: Vec<FolderDto> = result.folders.iter().map(FolderDto::from).collect();

    Ok((
        StatusCode::OK,
        Json(PaginatedResponse::new(items, result.next_cursor)),
    ))
}
