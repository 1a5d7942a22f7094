//! HTTP transport integration tests.
//!
//! Starts an axum mock backend and drives it through `CandidateStore`.

mod support;

use axum::http::StatusCode;
use candidate_board::{
    CandidateBoard, CandidateStore, CandidateUpdate, HttpTransport, LogNotifier, NewCandidate,
    Seniority, StoreError, Upload,
};

use support::{candidate, dead_server, seed, start_server, Backend};

async fn connected(backend: Backend) -> CandidateStore<HttpTransport> {
    let config = start_server(backend).await;
    CandidateStore::connect(&config).unwrap()
}

#[tokio::test]
async fn load_all_replaces_cache() {
    let backend = Backend::with_records(seed());
    let store = connected(backend.clone()).await;

    let loaded = store.load_all().await.unwrap();
    assert_eq!(loaded, seed());
    assert_eq!(store.snapshot(), seed());
    assert_eq!(backend.requests(), vec!["GET /candidates"]);
}

#[tokio::test]
async fn observers_receive_loaded_list() {
    let store = connected(Backend::with_records(seed())).await;
    let mut feed = store.observe_candidates();
    assert!(feed.next().await.unwrap().is_empty());

    store.load_all().await.unwrap();
    assert_eq!(feed.next().await.unwrap().len(), 2);

    // A late subscriber gets the current list straight away.
    let mut late = store.observe_candidates();
    assert_eq!(late.next().await.unwrap().len(), 2);
}

#[tokio::test]
async fn fetch_single_candidate() {
    let store = connected(Backend::with_records(seed())).await;
    let jane = store.fetch("2").await.unwrap();
    assert_eq!(jane.name, "Jane");
    assert!(store.snapshot().is_empty());

    let missing = store.fetch("99").await.unwrap_err();
    assert_eq!(missing.status_code(), 404);
}

#[tokio::test]
async fn ids_with_reserved_characters_stay_one_segment() {
    let odd = candidate("team/7?x#y", "Odd", "Id", Seniority::Junior, 1, true);
    let backend = Backend::with_records(vec![odd.clone()]);
    let store = connected(backend.clone()).await;
    store.load_all().await.unwrap();

    assert_eq!(store.fetch("team/7?x#y").await.unwrap(), odd);
    store.delete("team/7?x#y").await.unwrap();
    assert!(store.snapshot().is_empty());
    assert!(backend
        .requests()
        .contains(&"DELETE /candidates/team/7?x#y".to_string()));
}

#[tokio::test]
async fn create_sends_multipart_and_prepends() {
    let backend = Backend::with_records(seed());
    let store = connected(backend.clone()).await;
    store.load_all().await.unwrap();

    let payload = NewCandidate::new("Ada", "Lovelace").with_file(
        Upload::new("candidates.xlsx", vec![0x50, 0x4b, 0x03, 0x04])
            .with_content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    );
    let created = store.create(&payload).await.unwrap();

    assert_eq!(created.id, "srv-3");
    assert_eq!(store.snapshot()[0], created);
    assert_eq!(store.snapshot().len(), 3);

    let uploads = backend.uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].name, "Ada");
    assert_eq!(uploads[0].surname, "Lovelace");
    assert_eq!(uploads[0].file_name.as_deref(), Some("candidates.xlsx"));
    assert_eq!(uploads[0].file_bytes, vec![0x50, 0x4b, 0x03, 0x04]);
}

#[tokio::test]
async fn create_without_file() {
    let backend = Backend::default();
    let store = connected(backend.clone()).await;

    store.create(&NewCandidate::new("Alan", "Turing")).await.unwrap();
    assert!(backend.uploads()[0].file_name.is_none());
}

#[tokio::test]
async fn rejected_create_surfaces_status() {
    let store = connected(Backend::default()).await;
    let err = store.create(&NewCandidate::new("", "Turing")).await.unwrap_err();
    assert!(matches!(err, StoreError::Status { status: 400, .. }));
    assert!(store.snapshot().is_empty());
}

#[tokio::test]
async fn update_merges_partial_response() {
    let backend = Backend::with_records(seed());
    let store = connected(backend.clone()).await;
    store.load_all().await.unwrap();

    let merged = store
        .update("2", &CandidateUpdate::default().years(8).availability(true))
        .await
        .unwrap()
        .unwrap();

    // The backend only echoed id, years and availability.
    assert_eq!(merged.years, 8);
    assert!(merged.availability);
    assert_eq!(merged.name, "Jane");
    assert_eq!(merged.seniority, Seniority::Senior);
    assert_eq!(merged.created_at, "2024-05-01T10:00:00.000Z");

    let ids: Vec<_> = store.snapshot().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[tokio::test]
async fn update_body_never_carries_server_fields() {
    let backend = Backend::with_records(seed());
    let store = connected(backend.clone()).await;
    store.load_all().await.unwrap();

    store
        .update("1", &CandidateUpdate::default().name("Johnny"))
        .await
        .unwrap();

    let patches = backend.patches();
    assert_eq!(patches, vec![serde_json::json!({ "name": "Johnny" })]);
}

#[tokio::test]
async fn delete_removes_from_cache() {
    let backend = Backend::with_records(seed());
    let store = connected(backend.clone()).await;
    store.load_all().await.unwrap();

    store.delete("1").await.unwrap();
    assert_eq!(store.snapshot().len(), 1);
    assert_eq!(store.snapshot()[0].id, "2");
    assert!(backend.requests().contains(&"DELETE /candidates/1".to_string()));
}

#[tokio::test]
async fn server_errors_leave_cache_untouched() {
    let backend = Backend::with_records(seed());
    let store = connected(backend.clone()).await;
    store.load_all().await.unwrap();
    let before = store.snapshot();

    backend.fail_with(StatusCode::INTERNAL_SERVER_ERROR);

    let err = store.load_all().await.unwrap_err();
    assert_eq!(err.status_code(), 500);
    assert!(store.create(&NewCandidate::new("Ada", "Lovelace")).await.is_err());
    assert!(store
        .update("1", &CandidateUpdate::default().years(3))
        .await
        .is_err());
    assert!(store.delete("1").await.is_err());
    assert_eq!(store.snapshot(), before);

    backend.recover();
    store.delete("1").await.unwrap();
    assert_eq!(store.snapshot().len(), 1);
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let config = dead_server().await;
    let store = CandidateStore::connect(&config).unwrap();

    let err = store.load_all().await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err}");
}

#[tokio::test]
async fn connected_board_pages_by_configured_size() {
    let config = start_server(Backend::with_records(seed()))
        .await
        .with_page_size(1);
    let mut board = CandidateBoard::connect(&config, LogNotifier::new()).unwrap();
    board.load().await.unwrap();

    assert_eq!(board.view().page_size(), config.page_size);
    assert_eq!(board.total_pages(), 2);
    assert_eq!(board.page().rows[0].name, "Jane");

    board.next_page();
    assert_eq!(board.page().rows[0].name, "John");
}
