//! Shared application state for the FINAURA server.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`. Nothing in it changes after startup.

use finaura_core::RenderContext;

use crate::config::ServerConfig;

/// Shared application state passed to all HTTP handlers.
#[derive(Debug)]
pub struct AppState {
    /// Loaded server configuration.
    pub config: ServerConfig,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Render context for a request arriving now.
    #[must_use]
    pub fn render_context(&self) -> RenderContext {
        RenderContext::now(self.config.form_endpoint.clone())
    }
}
