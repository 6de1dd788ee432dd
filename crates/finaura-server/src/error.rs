//! HTTP error types for the FINAURA server.
//!
//! Page requests that match nothing answer with the site's HTML not-found
//! page rather than a JSON body, since every client is a browser.

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use finaura_core::links::PLACEHOLDER_PATHS;

/// Application-level error returned from HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// No page at the requested path.
    NotFound {
        path: String,
        /// Calendar year for the footer of the not-found page.
        year: i32,
    },
}

impl AppError {
    /// Whether the path is a linked module that has no page yet.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        match self {
            Self::NotFound { path, .. } => PLACEHOLDER_PATHS.contains(&path.as_str()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_placeholder() {
            tracing::debug!(error = ?self, "placeholder module requested");
        }
        match self {
            Self::NotFound { year, .. } => (
                StatusCode::NOT_FOUND,
                [(header::CACHE_CONTROL, "no-store")],
                Html(finaura_core::render_not_found(year)),
            )
                .into_response(),
        }
    }
}
