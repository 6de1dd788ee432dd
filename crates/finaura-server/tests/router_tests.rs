//! Router tests for the FINAURA server.
//!
//! Requests are driven through the Axum router in-process with
//! `tower::ServiceExt::oneshot`; no socket is bound.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::Datelike;
use http_body_util::BodyExt;
use tower::ServiceExt;

use finaura_core::links::{resolve, PLACEHOLDER_PATHS};
use finaura_core::Route;
use finaura_server::build_router;
use finaura_server::config::ServerConfig;
use finaura_server::state::AppState;

const FORM_ENDPOINT: &str = "https://forms.example.test/f/newsletter";

fn app_with(config: ServerConfig) -> Router {
    build_router(Arc::new(AppState::new(config)))
}

fn app() -> Router {
    app_with(ServerConfig {
        form_endpoint: FORM_ENDPOINT.to_owned(),
        site_url: "https://finaura.test".to_owned(),
        ..ServerConfig::default()
    })
}

/// Helper: send a GET and return (status, headers, body).
async fn get(app: Router, path: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

// ── Pages ────────────────────────────────────────────────────────────

#[tokio::test]
async fn every_route_serves_title_and_heading() {
    for route in Route::ALL {
        let (status, headers, body) = get(app(), route.path()).await;
        assert_eq!(status, StatusCode::OK, "{}", route.path());
        assert!(
            headers[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html"),
            "{}",
            route.path()
        );
        assert!(body.contains(&format!("<title>{}</title>", route.title())));
        assert!(body.contains(route.heading()), "{}", route.path());
    }
}

#[tokio::test]
async fn footer_shows_current_year() {
    let before = chrono::Local::now().year();
    let (_, _, body) = get(app(), "/impressum").await;
    let after = chrono::Local::now().year();
    assert!(
        body.contains(&format!("© {before} FINAURA")) || body.contains(&format!("© {after} FINAURA")),
        "footer year missing"
    );
}

#[tokio::test]
async fn signup_form_posts_to_configured_endpoint() {
    let (_, _, body) = get(app(), "/").await;
    let form = body
        .split_once("<form")
        .and_then(|(_, rest)| rest.split_once("</form>"))
        .map(|(form, _)| form)
        .expect("home page has a form");
    assert!(form.contains("method=\"post\""));
    assert!(form.contains(&format!("action=\"{FORM_ENDPOINT}\"")));
    assert_eq!(form.matches("<input").count(), 1);
    assert!(form.contains("name=\"email\""));
    assert!(form.contains(" required"));
}

#[tokio::test]
async fn head_request_is_answered() {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::HEAD)
                .uri("/privacy")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// ── Not found ────────────────────────────────────────────────────────

#[tokio::test]
async fn placeholder_modules_are_not_found() {
    for path in PLACEHOLDER_PATHS {
        let (status, headers, body) = get(app(), path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert!(body.contains("Seite nicht gefunden"));
    }
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, headers, _) = get(app(), "/does/not/exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(headers[header::CACHE_CONTROL], "no-store");
}

#[tokio::test]
async fn trailing_slash_is_not_found_and_not_resolved() {
    for route in Route::ALL.into_iter().filter(|r| *r != Route::Home) {
        let path = format!("{}/", route.path());
        let (status, _, _) = get(app(), &path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert!(!resolve(&path, Route::Home).is_resolved(), "{path}");
    }
}

// ── Assets, SEO, health ──────────────────────────────────────────────

#[tokio::test]
async fn embedded_assets_are_served() {
    let (status, headers, body) = get(app(), "/logo.svg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "image/svg+xml");
    assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=3600");
    assert!(body.starts_with("<svg"));

    let (status, _, body) = get(app(), "/styles.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(".btn-secondary"));

    let (status, _, _) = get(app(), "/hero.svg").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn robots_and_sitemap_use_site_url() {
    let (status, _, body) = get(app(), "/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Sitemap: https://finaura.test/sitemap.xml"));

    let (status, headers, body) = get(app(), "/sitemap.xml").await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("application/xml"));
    assert!(body.contains("<loc>https://finaura.test/privacy</loc>"));
    assert!(!body.contains("av-vorbezug"));
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, _, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn security_headers_are_set() {
    let (_, headers, _) = get(app(), "/").await;
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
    assert_eq!(headers["referrer-policy"], "strict-origin-when-cross-origin");
    assert_eq!(headers[header::CACHE_CONTROL], "no-cache");
}

#[tokio::test]
async fn public_dir_served_under_static() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("brochure.txt"), "FINAURA Broschüre").unwrap();

    let app = app_with(ServerConfig {
        public_dir: Some(dir.path().to_path_buf()),
        ..ServerConfig::default()
    });

    let (status, _, body) = get(app.clone(), "/static/brochure.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "FINAURA Broschüre");

    let (status, _, _) = get(app, "/static/missing.txt").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
