//! Integration tests for fixture-client
//!
//! These tests spin up a real fixture server and use the client to interact
//! with it. This keeps the client in sync with the API.

use std::io::Write;

use axum::http::header;
use axum::response::AppendHeaders;
use axum::routing::get;
use axum::Router;
use fixture_api::{create_router, AppState};
use fixture_client::testing::TestServer;
use fixture_client::FixtureClientError;
use fixture_core::{Credentials, FixtureConfig};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

const REFERENCE: &str = "[package]\nname = \"demo\"\n";

fn reference_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(REFERENCE.as_bytes()).unwrap();
    file
}

async fn start(config: FixtureConfig) -> TestServer {
    TestServer::start(create_router(AppState::new(config)))
        .await
        .expect("Failed to start test server")
}

fn assert_rejected(result: fixture_client::Result<String>, detail: &str) {
    match result {
        Err(FixtureClientError::ServerError { status, detail: d }) => {
            assert_eq!(status, 400);
            assert_eq!(d, detail);
        }
        other => panic!("expected 400 '{}', got {:?}", detail, other),
    }
}

#[tokio::test]
async fn test_health() {
    let server = start(FixtureConfig::default()).await;
    assert_eq!(server.client.health().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_get_csrf_scrapes_token_and_cookie() {
    let server = start(FixtureConfig::default()).await;

    let page = server.client.get_csrf().await.unwrap();
    assert_eq!(page.token.as_deref(), Some("fjlalksdjfaksdj"));
    assert_eq!(page.cookie("PHPSESSID"), Some("SUPERSECURECOOKIE123"));

    let alias = server.client.get_csrf_at("/first/get-csrf").await.unwrap();
    assert_eq!(alias, page);
}

#[tokio::test]
async fn test_get_csrf_reads_every_set_cookie() {
    let router = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(
            "/get-csrf",
            get(|| async {
                (
                    AppendHeaders([
                        (header::SET_COOKIE, "PHPSESSID=abc; Path=/; HttpOnly"),
                        (header::SET_COOKIE, "csrftoken=xyz; Path=/; SameSite=Strict"),
                    ]),
                    "<p>grep me -> _token=with space</p>",
                )
            }),
        );
    let server = TestServer::start(router).await.unwrap();

    let page = server.client.get_csrf().await.unwrap();
    assert_eq!(page.token.as_deref(), Some("with space"));
    assert_eq!(page.cookie("PHPSESSID"), Some("abc"));
    assert_eq!(page.cookie("csrftoken"), Some("xyz"));
    assert_eq!(page.cookies.len(), 2);
}

#[tokio::test]
async fn test_start_fails_without_health_route() {
    let result = TestServer::start(Router::new()).await;
    match result {
        Err(FixtureClientError::ServerError { status, .. }) => assert_eq!(status, 404),
        Err(other) => panic!("expected 404 from /health, got {:?}", other),
        Ok(_) => panic!("server without /health should not report ready"),
    }
}

#[tokio::test]
async fn test_login_json() {
    let server = start(FixtureConfig::default()).await;
    let client = &server.client;

    let ok = client
        .login_json(&Credentials::new("admin", "123123", "fjlalksdjfaksdj"))
        .await
        .unwrap();
    assert_eq!(ok, "ok");

    assert_rejected(
        client
            .login_json(&Credentials::new("guest", "123123", "fjlalksdjfaksdj"))
            .await,
        "invalid username",
    );
    assert_rejected(
        client
            .login_json(&Credentials::new("admin", "guess", "fjlalksdjfaksdj"))
            .await,
        "invalid password",
    );
    assert_rejected(
        client
            .login_json(&Credentials::new("admin", "123123", "guess"))
            .await,
        "invalid token",
    );
}

#[tokio::test]
async fn test_login_form_and_multipart_match_json() {
    let server = start(FixtureConfig::default()).await;
    let client = &server.client;

    let cases = [
        Credentials::new("admin", "123123", "fjlalksdjfaksdj"),
        Credentials::new("x", "y", "z"),
        Credentials::new("admin", "y", "z"),
        Credentials::new("admin", "123123", "z"),
    ];

    for creds in &cases {
        let json = client.login_json(creds).await.map_err(|e| e.to_string());
        let form = client.login_form(creds).await.map_err(|e| e.to_string());
        let multipart = client.login_multipart(creds).await.map_err(|e| e.to_string());

        assert_eq!(form, json, "form differs for {:?}", creds);
        assert_eq!(multipart, json, "multipart differs for {:?}", creds);
    }
}

#[tokio::test]
async fn test_login_aliases() {
    let server = start(FixtureConfig::default()).await;
    let creds = Credentials::new("admin", "123123", "fjlalksdjfaksdj");

    for path in ["/first/login", "/login/json"] {
        assert_eq!(server.client.login_json_at(path, &creds).await.unwrap(), "ok");
    }
    for path in ["/first/login-form", "/login/form"] {
        assert_eq!(server.client.login_form_at(path, &creds).await.unwrap(), "ok");
    }
}

#[tokio::test]
async fn test_upload_path() {
    let file = reference_file();
    let server = start(FixtureConfig::default().with_reference_path(file.path())).await;

    let ok = server
        .client
        .upload_path("fjlalksdjfaksdj", file.path())
        .await
        .unwrap();
    assert_eq!(ok, "ok");
}

#[tokio::test]
async fn test_upload_rejections() {
    let file = reference_file();
    let server = start(FixtureConfig::default().with_reference_path(file.path())).await;
    let client = &server.client;

    assert_rejected(
        client
            .upload_file("wrong", "Cargo.toml", REFERENCE.as_bytes().to_vec())
            .await,
        "Invalid token",
    );
    assert_rejected(
        client
            .upload_file("fjlalksdjfaksdj", "Cargo.toml", b"different".to_vec())
            .await,
        "Invalid file",
    );
    assert_rejected(
        client
            .upload_file("fjlalksdjfaksdj", "blob.bin", vec![0xff, 0xfe, 0xfd])
            .await,
        "Invalid file encoding",
    );
}

#[tokio::test]
async fn test_missing_reference_is_server_error() {
    let server =
        start(FixtureConfig::default().with_reference_path("/no/such/reference/file")).await;

    let err = server
        .client
        .upload_file("fjlalksdjfaksdj", "Cargo.toml", b"x".to_vec())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(!err.is_rejection());
}

#[tokio::test]
async fn test_shutdown() {
    let server = start(FixtureConfig::default()).await;
    let base_url = server.base_url();
    server.shutdown().await;

    let client = fixture_client::FixtureClient::new(&base_url).unwrap();
    assert!(client.health().await.is_err());
}
