//! Embedded static assets plus `robots.txt` and `sitemap.xml`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use finaura_core::assets::{Asset, ASSETS};
use finaura_core::seo;

use crate::state::AppState;

/// Cache lifetime for embedded assets.
const ASSET_CACHE_CONTROL: &str = "public, max-age=3600";

/// Build the asset router.
pub fn router() -> Router<Arc<AppState>> {
    ASSETS
        .iter()
        .fold(Router::new(), |router, asset| {
            router.route(asset.path, get(move || async move { serve(asset) }))
        })
        .route("/robots.txt", get(robots_txt))
        .route("/sitemap.xml", get(sitemap_xml))
}

fn serve(asset: &'static Asset) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, asset.content_type),
            (header::CACHE_CONTROL, ASSET_CACHE_CONTROL),
        ],
        asset.body,
    )
}

async fn robots_txt(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        seo::robots_txt(&state.config.site_url),
    )
}

async fn sitemap_xml(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        seo::sitemap_xml(&state.config.site_url),
    )
}
