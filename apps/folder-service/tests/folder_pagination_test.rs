//! 組み込みサンプルデータに対するページネーションの統合テスト
//!
//! ユースケースとルーターの両方から、カーソルを辿った結果が
//! 全件取得と一致することを確認する。

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use folio_domain::{cursor::Cursor, organization::OrganizationId};
use folio_folder_service::{
    app_builder::build_app,
    handler::{FolderState, folder::FolderDto},
    usecase::{FetchFolderRequest, FolderUseCaseImpl, PaginatedFetchRequest},
};
use folio_infra::{InMemoryFolderRepository, repository::DEFAULT_ORGANIZATION_ID};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tower::ServiceExt;

fn usecase() -> FolderUseCaseImpl {
    let repo = InMemoryFolderRepository::with_sample_data().unwrap();
    FolderUseCaseImpl::new(Arc::new(repo))
}

fn test_app() -> Router {
    build_app(Arc::new(FolderState { usecase: usecase() }))
}

fn default_org() -> OrganizationId {
    OrganizationId::parse_str(DEFAULT_ORGANIZATION_ID).unwrap()
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[rstest]
#[tokio::test]
async fn test_カーソルを辿った結果は全件取得と一致する(
    #[values(1, 2, 3, 4, 5, 7, 11, 12, 13, 100)] limit: i64,
) {
    let sut = usecase();
    let all = sut
        .get_all(FetchFolderRequest {
            organization_id: default_org(),
        })
        .await
        .unwrap()
        .folders;

    let mut collected = Vec::new();
    let mut cursor = String::new();
    let mut pages = 0;
    let mut last_page_len = 0;
    loop {
        let page = sut
            .get_page(PaginatedFetchRequest {
                organization_id: default_org(),
                limit,
                cursor: cursor.clone(),
            })
            .await
            .unwrap();
        pages += 1;
        last_page_len = page.folders.len();
        collected.extend(page.folders);
        if page.next_cursor.is_empty() {
            break;
        }
        cursor = page.next_cursor;
    }

    let limit = usize::try_from(limit).unwrap();
    assert_eq!(all.len(), 12);
    assert_eq!(collected, all);
    assert_eq!(pages, all.len().div_ceil(limit));
    let expected_last = match all.len() % limit {
        0 => limit,
        rem => rem,
    };
    assert_eq!(last_page_len, expected_last);
}

#[tokio::test]
async fn test_httpでカーソルを辿ると全件を取得できる() {
    let (status, all) = get_json(
        test_app(),
        &format!("/internal/folders?organization_id={DEFAULT_ORGANIZATION_ID}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let all: Vec<FolderDto> = serde_json::from_value(all["data"].clone()).unwrap();

    let mut collected: Vec<FolderDto> = Vec::new();
    let mut cursor = String::new();
    let mut tokens = Vec::new();
    loop {
        let (status, body) = get_json(
            test_app(),
            &format!(
                "/internal/folders/page?organization_id={DEFAULT_ORGANIZATION_ID}&limit=5&cursor={}",
                urlencoding::encode(&cursor)
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let data: Vec<FolderDto> = serde_json::from_value(body["data"].clone()).unwrap();
        collected.extend(data);
        let next = body["next_cursor"].as_str().unwrap().to_string();
        if next.is_empty() {
            break;
        }
        tokens.push(next.clone());
        cursor = next;
    }

    assert_eq!(collected, all);
    assert_eq!(tokens, vec!["bmV4dCBjdXJzb3I6NQ==", "bmV4dCBjdXJzb3I6MTA="]);
}

#[tokio::test]
async fn test_組織ごとにフォルダが分離されている() {
    let (status, body) = get_json(
        test_app(),
        "/internal/folders/page?organization_id=0f3c6c8e-52b1-4c0a-9a57-2b1f7f1d5e21&limit=5",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data: Vec<FolderDto> = serde_json::from_value(body["data"].clone()).unwrap();
    let names: Vec<&str> = data.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["inbox", "drafts", "shared"]);
    assert_eq!(body["next_cursor"], "");
}

#[tokio::test]
async fn test_存在しない組織は404を返す() {
    let (status, body) = get_json(
        test_app(),
        "/internal/folders/page?organization_id=11111111-2222-3333-4444-555555555555&limit=5",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_ヘルスチェックが応答する() {
    let (status, body) = get_json(test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_末尾3件手前のカーソルで最後の3件を取得できる() {
    let organization_id = OrganizationId::parse_str("6591e16c-c257-4366-bf6d-650c68f71284").unwrap();
    let sut = usecase();
    let all = sut
        .get_all(FetchFolderRequest { organization_id })
        .await
        .unwrap()
        .folders;
    assert_eq!(all.len(), 10);

    let page = sut
        .get_page(PaginatedFetchRequest {
            organization_id,
            limit: 5,
            cursor: Cursor::new(all.len() - 3).encode(),
        })
        .await
        .unwrap();

    assert_eq!(page.folders, all[7..].to_vec());
    assert_eq!(page.next_cursor, "");
}

#[rstest]
#[case::末尾ちょうど(12)]
#[case::末尾より後(1000)]
#[case::最大値(usize::MAX)]
#[tokio::test]
async fn test_末尾以降のカーソルは空ページを返す(#[case] offset: usize) {
    let page = usecase()
        .get_page(PaginatedFetchRequest {
            organization_id: default_org(),
            limit:           5,
            cursor:          Cursor::new(offset).encode(),
        })
        .await
        .unwrap();

    assert!(page.folders.is_empty());
    assert_eq!(page.next_cursor, "");
}
