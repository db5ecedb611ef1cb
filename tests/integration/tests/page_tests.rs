//! HTML page integration tests
//!
//! Each test starts a fake backend and a real server on ephemeral ports.
//!
//! Run with: cargo test -p integration-tests --test page_tests

use integration_tests::{
    assert_html, assert_status, fixtures::*, FakeBackend, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Member Card
// ============================================================================

#[tokio::test]
async fn test_card_page_renders_member() {
    let backend = FakeBackend::builder()
        .member("tok-1", member_hanako())
        .spawn()
        .await
        .unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get("/?token=tok-1").await.unwrap();
    let html = assert_html(response, StatusCode::OK).await.unwrap();

    assert!(html.contains(r#"<div class="name">Hanako Yamada</div>"#));
    assert!(html.contains("<div>会員番号：SL-0042</div>"));
    assert!(html.contains("<div>入会日：2025/12/1</div>"));
    assert!(html.contains(r#"src="https://drive.google.com/uc?export=view&amp;id=1AbCdEf""#));
    assert!(html.contains(r#"<div class="label">一般社団法人</div>"#));
    assert_eq!(backend.requests(), 1);

    let query = backend.last_query().unwrap();
    assert_eq!(query["type"], "member");
    assert_eq!(query["token"], "tok-1");
}

#[tokio::test]
async fn test_card_page_sparse_member() {
    let backend = FakeBackend::builder()
        .member("tok-2", member_sparse())
        .spawn()
        .await
        .unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get("/?token=tok-2").await.unwrap();
    let html = assert_html(response, StatusCode::OK).await.unwrap();

    assert!(html.contains(r#"<div class="name">Member</div>"#));
    assert!(html.contains("<div>会員番号：7</div>"));
    assert!(html.contains("<div>入会日：-</div>"));
    assert!(html.contains(r#"<div class="photo">No Photo</div>"#));
}

#[tokio::test]
async fn test_card_page_token_is_encoded() {
    let backend = FakeBackend::builder()
        .member("a b&c=d", member_hanako())
        .spawn()
        .await
        .unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get_query("/", &[("token", "a b&c=d")]).await.unwrap();
    let html = assert_html(response, StatusCode::OK).await.unwrap();

    assert!(html.contains("Hanako Yamada"));
    assert!(html.contains(r#"href="/notices?token=a%20b%26c%3Dd""#));
    assert_eq!(backend.last_query().unwrap()["token"], "a b&c=d");
}

#[tokio::test]
async fn test_card_page_without_token_skips_backend() {
    let backend = FakeBackend::builder().spawn().await.unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    for path in ["/", "/?token="] {
        let response = server.get(path).await.unwrap();
        let html = assert_html(response, StatusCode::OK).await.unwrap();
        assert!(html.contains("事務局から共有された会員証URLでアクセスしてください。"));
        assert!(html.contains("公式サイトへ"));
    }

    assert_eq!(backend.requests(), 0);
}

#[tokio::test]
async fn test_card_page_unknown_member() {
    let backend = FakeBackend::builder().spawn().await.unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get("/?token=nobody").await.unwrap();
    let html = assert_html(response, StatusCode::NOT_FOUND).await.unwrap();

    assert!(html.contains("会員情報が見つかりませんでした。"));
    assert!(!html.contains("card-header"));
}

#[tokio::test]
async fn test_card_page_backend_failure() {
    let backend = FakeBackend::builder().broken().spawn().await.unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get("/?token=tok-1").await.unwrap();
    let html = assert_html(response, StatusCode::BAD_GATEWAY).await.unwrap();

    assert!(html.contains("通信エラーが発生しました。時間をおいて再度お試しください。"));
    assert_eq!(backend.requests(), 1);
}

#[tokio::test]
async fn test_card_page_escapes_backend_values() {
    let backend = FakeBackend::builder()
        .member("tok-x", json!({ "display_name": "<script>alert(1)</script>" }))
        .spawn()
        .await
        .unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get("/?token=tok-x").await.unwrap();
    let html = assert_html(response, StatusCode::OK).await.unwrap();

    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

// ============================================================================
// Notices
// ============================================================================

#[tokio::test]
async fn test_notices_page_json_transport() {
    let backend = FakeBackend::builder()
        .notices(notices_mixed())
        .spawn()
        .await
        .unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get("/notices?token=tok-1").await.unwrap();
    let html = assert_html(response, StatusCode::OK).await.unwrap();

    let pinned = html.find(">Pinned</h2>").unwrap();
    let summer = html.find(">Summer party</h2>").unwrap();
    let spring = html.find(">Spring meeting</h2>").unwrap();
    assert!(pinned < summer && summer < spring);

    assert!(html.contains(r#"<div class="notice-meta">2024/6/1</div>"#));
    assert!(html.contains("Agenda:<br>Item one<br>Item two"));
    assert!(html.contains(r#"href="/?token=tok-1""#));
    assert!(backend.last_query().unwrap().get("callback").is_none());
}

#[tokio::test]
async fn test_notices_page_jsonp_transport() {
    let backend = FakeBackend::builder()
        .notices(notices_mixed())
        .spawn()
        .await
        .unwrap();
    let server = TestServer::start_with(&backend, &[("BACKEND_NOTICES_TRANSPORT", "jsonp")])
        .await
        .unwrap();

    let response = server.get("/notices").await.unwrap();
    let html = assert_html(response, StatusCode::OK).await.unwrap();
    assert_eq!(html.matches("<article class=\"notice-item\">").count(), 3);

    let query = backend.last_query().unwrap();
    assert_eq!(query["type"], "notices");
    assert_eq!(query["callback"], "handleNoticesResponse");
    assert!(query["ts"].parse::<i64>().is_ok());
}

#[tokio::test]
async fn test_notices_page_empty() {
    let backend = FakeBackend::builder().notices(json!([])).spawn().await.unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get("/notices").await.unwrap();
    let html = assert_html(response, StatusCode::OK).await.unwrap();

    assert!(html.contains("現在お知らせはありません。"));
    assert!(!html.contains("<article"));
}

#[tokio::test]
async fn test_notices_page_backend_failure() {
    let backend = FakeBackend::builder().broken().spawn().await.unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get("/notices").await.unwrap();
    let html = assert_html(response, StatusCode::BAD_GATEWAY).await.unwrap();

    assert!(html.contains("お知らせの取得に失敗しました。"));
    assert!(!html.contains("<article"));
}

// ============================================================================
// Player and Assets
// ============================================================================

#[tokio::test]
async fn test_player_page() {
    let backend = FakeBackend::builder().spawn().await.unwrap();
    let server = TestServer::start_with(&backend, &[("SITE_AUDIO_PATH", "/static/song.mp3")])
        .await
        .unwrap();

    let response = server.get("/player?token=tok-1").await.unwrap();
    let html = assert_html(response, StatusCode::OK).await.unwrap();

    assert!(html.contains(r#"<audio id="audio" class="audio" src="/static/song.mp3""#));
    assert!(html.contains(r#"<span id="duration" class="duration">0:00</span>"#));
    assert!(html.contains(r#"href="/?token=tok-1""#));
    assert!(html.contains(r#"<script src="/static/player.js" defer></script>"#));
    assert_eq!(backend.requests(), 0);
}

#[tokio::test]
async fn test_card_embeds_audio_widget() {
    let backend = FakeBackend::builder()
        .member("tok-1", member_hanako())
        .spawn()
        .await
        .unwrap();
    let server = TestServer::start_with(&backend, &[("SITE_AUDIO_PATH", "/static/song.mp3")])
        .await
        .unwrap();

    let response = server.get("/?token=tok-1").await.unwrap();
    let html = assert_html(response, StatusCode::OK).await.unwrap();
    assert!(html.contains(r#"id="play-btn""#));
}

#[tokio::test]
async fn test_player_page_without_audio() {
    let backend = FakeBackend::builder().spawn().await.unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get("/player").await.unwrap();
    let html = assert_html(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(!html.contains("<audio"));
}

#[tokio::test]
async fn test_static_assets() {
    let backend = FakeBackend::builder().spawn().await.unwrap();
    let server = TestServer::start(&backend).await.unwrap();

    let response = server.get("/service-worker.js").await.unwrap();
    let script = assert_html(response, StatusCode::OK).await.unwrap();
    assert!(script.contains("addEventListener('fetch'"));

    let response = server.get("/static/pwa-register.js").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/static/player.js").await.unwrap();
    let script = assert_html(response, StatusCode::OK).await.unwrap();
    assert!(script.contains("getElementById('play-btn')"));
    assert!(script.contains("addEventListener('timeupdate'"));

    let response = server.get("/static/missing.png").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
