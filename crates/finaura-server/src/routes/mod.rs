//! HTTP route handlers for the FINAURA site.
//!
//! Routes are organized by concern:
//! - `pages`: the rendered pages and the not-found fallback
//! - `assets`: embedded logo, hero image and stylesheet, `robots.txt`, `sitemap.xml`
//! - `sys`: health check

pub mod assets;
pub mod pages;
pub mod sys;
