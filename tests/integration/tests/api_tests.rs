//! JSON API integration tests
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, FakeBackend, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let backend = FakeBackend::builder().broken().spawn().await.unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let backend = FakeBackend::builder().spawn().await.unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    let ready: ReadinessResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ready.status, "ready");
}

#[tokio::test]
async fn test_health_ready_backend_down() {
    let backend = FakeBackend::builder().broken().spawn().await.unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    let ready: ReadinessResponse = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert_eq!(ready.status, "not_ready");
}

// ============================================================================
// Member Card API Tests
// ============================================================================

#[tokio::test]
async fn test_member_card_api() {
    let backend = FakeBackend::builder()
        .member("tok-1", member_hanako())
        .spawn()
        .await
        .unwrap();
    let server = TestServer::start_with(&backend, &[("SITE_AUDIO_PATH", "/static/song.mp3")])
        .await
        .unwrap();

    let response = server.get("/api/v1/member-card?token=tok-1").await.unwrap();
    let card: MemberCardResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(card.display_name, "Hanako Yamada");
    assert_eq!(card.member_id, "SL-0042");
    assert_eq!(card.joined, "2025/12/1");
    match card.photo {
        PhotoResponse::Image { src, alt } => {
            assert_eq!(src, "https://drive.google.com/uc?export=view&id=1AbCdEf");
            assert_eq!(alt, "Hanako Yamada");
        }
        PhotoResponse::Placeholder => panic!("expected an image"),
    }
    assert_eq!(card.audio.unwrap().src, "/static/song.mp3");
}

#[tokio::test]
async fn test_member_card_api_missing_token() {
    let backend = FakeBackend::builder().spawn().await.unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get("/api/v1/member-card").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error.code, "MISSING_TOKEN");
    assert!(!body.error.message.is_empty());
    assert_eq!(backend.requests(), 0);
}

#[tokio::test]
async fn test_member_card_api_overlong_token() {
    let backend = FakeBackend::builder().spawn().await.unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let token = "x".repeat(257);
    let response = server
        .get_query("/api/v1/member-card", &[("token", token.as_str())])
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error.code, "VALIDATION_ERROR");
    assert_eq!(backend.requests(), 0);
}

#[tokio::test]
async fn test_member_card_api_not_found() {
    let backend = FakeBackend::builder().spawn().await.unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get("/api/v1/member-card?token=nobody").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "MEMBER_NOT_FOUND");
}

#[tokio::test]
async fn test_member_card_api_backend_down() {
    let backend = FakeBackend::builder().broken().spawn().await.unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get("/api/v1/member-card?token=tok-1").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_GATEWAY).await.unwrap();
    assert_eq!(body.error.code, "BACKEND_UNAVAILABLE");
}

// ============================================================================
// Notices API Tests
// ============================================================================

#[tokio::test]
async fn test_notices_api() {
    let backend = FakeBackend::builder()
        .notices(notices_mixed())
        .spawn()
        .await
        .unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get("/api/v1/notices").await.unwrap();
    let list: NoticeListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let titles: Vec<&str> = list.notices.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["Pinned", "Summer party", "Spring meeting"]);
    assert_eq!(list.notices[0].date, "");
    assert_eq!(list.notices[1].date, "2024/6/1");
    assert_eq!(
        list.notices[2].body_lines,
        vec!["Agenda:", "Item one", "Item two"]
    );
}

#[tokio::test]
async fn test_notices_api_missing_list() {
    // Backend answers without a `notices` array
    let backend = FakeBackend::builder().spawn().await.unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get("/api/v1/notices").await.unwrap();
    let list: NoticeListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(list.notices.is_empty());
}
