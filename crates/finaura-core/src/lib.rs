//! Core library for the FINAURA site.
//!
//! Layout components, the page content table, page rendering, link
//! resolution and static export. Rendering is synchronous and pure; the
//! HTTP server and the CLI are thin shells around it.

pub mod assets;
pub mod components;
pub mod content;
pub mod error;
pub mod escape;
pub mod export;
pub mod links;
pub mod pages;
pub mod seo;

pub use pages::{render, render_not_found, RenderContext, Route};

/// Default target of the mailing-list form.
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/finaura";

/// Default canonical origin used in `sitemap.xml` and `robots.txt`.
pub const DEFAULT_SITE_URL: &str = "https://finaura.ch";
