//! Page routes.
//!
//! One `GET` route per [`Route`]; every request renders the page afresh so
//! the footer year is always current. Unknown paths fall through to
//! [`not_found`].

use std::sync::Arc;

use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use finaura_core::{render, Route};

use crate::error::AppError;
use crate::state::AppState;

/// Build the page router.
pub fn router() -> Router<Arc<AppState>> {
    Route::ALL.into_iter().fold(Router::new(), |router, route| {
        router.route(
            route.path(),
            get(move |State(state): State<Arc<AppState>>| async move { page(&state, route) }),
        )
    })
}

fn page(state: &AppState, route: Route) -> Html<String> {
    Html(render(route, &state.render_context()))
}

/// Fallback for every path without a handler.
pub async fn not_found(State(state): State<Arc<AppState>>, uri: Uri) -> AppError {
    AppError::NotFound {
        path: uri.path().to_owned(),
        year: state.render_context().year,
    }
}
