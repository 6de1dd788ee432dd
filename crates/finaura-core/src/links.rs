//! Internal link classification and the site-wide link audit.
//!
//! Pages link to a handful of module paths that have no page yet. Those are
//! listed in [`PLACEHOLDER_PATHS`]; they answer 404 but are not counted as
//! broken.

use serde::Serialize;

use crate::assets;
use crate::pages::{render, render_not_found, RenderContext, Route};

/// Paths that pages link to but that are not implemented.
pub const PLACEHOLDER_PATHS: [&str; 7] = [
    "/ik",
    "/bvg",
    "/3a",
    "/budget",
    "/zukunft",
    "/micro-advice",
    "/so-funktionierts",
];

/// Where an `href` points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LinkTarget {
    /// An implemented page, optionally with an anchor present on that page.
    Page { route: Route, anchor: Option<String> },
    /// A static asset.
    Asset { path: String },
    /// A documented placeholder path.
    Placeholder { path: String },
    /// Absolute URL, `mailto:` or similar; not checked.
    External { href: String },
    /// The `#` stand-in used by buttons without a target.
    Inert,
    /// Internal link that resolves to nothing.
    Unresolved { href: String, reason: String },
}

impl LinkTarget {
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved { .. })
    }
}

/// Classify `href` as it appears on the page at `from`.
#[must_use]
pub fn resolve(href: &str, from: Route) -> LinkTarget {
    classify(href, Some(from))
}

/// Same as [`resolve`]; `from` is `None` for pages without a route (404).
fn classify(href: &str, from: Option<Route>) -> LinkTarget {
    if href == "#" {
        return LinkTarget::Inert;
    }
    if is_external(href) {
        return LinkTarget::External {
            href: href.to_owned(),
        };
    }

    let (path, anchor) = match href.split_once('#') {
        Some((path, anchor)) => (path, Some(anchor)),
        None => (href, None),
    };
    let path = path.split_once('?').map_or(path, |(p, _)| p);

    let route = if path.is_empty() {
        match from {
            Some(route) => route,
            None => {
                return LinkTarget::Unresolved {
                    href: href.to_owned(),
                    reason: "fragment on a page without anchors".to_owned(),
                };
            }
        }
    } else if let Some(route) = Route::from_path(path) {
        route
    } else if PLACEHOLDER_PATHS.contains(&path) {
        return LinkTarget::Placeholder {
            path: path.to_owned(),
        };
    } else if assets::find(path).is_some() {
        return LinkTarget::Asset {
            path: path.to_owned(),
        };
    } else {
        return LinkTarget::Unresolved {
            href: href.to_owned(),
            reason: "no page at this path".to_owned(),
        };
    };

    match anchor {
        Some(anchor) if !route.anchors().contains(&anchor) => LinkTarget::Unresolved {
            href: href.to_owned(),
            reason: format!("no element with id `{anchor}` on {}", route.path()),
        },
        anchor => LinkTarget::Page {
            route,
            anchor: anchor.map(str::to_owned),
        },
    }
}

/// Whether `value` is an absolute `http(s)` URL with a non-empty host.
///
/// Form endpoints and the canonical site URL must pass this before they
/// are written into a page.
#[must_use]
pub fn is_absolute_http_url(value: &str) -> bool {
    value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .and_then(|rest| rest.split(['/', '?', '#']).next())
        .is_some_and(|host| !host.is_empty() && !host.contains(char::is_whitespace))
}

fn is_external(href: &str) -> bool {
    href.starts_with("http://")
        || href.starts_with("https://")
        || href.starts_with("//")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
}

/// Collect every `href` and `src` attribute value in `html`, in order.
///
/// Only double-quoted attributes are recognised, which is all the renderer
/// produces. Entity-escaped `&amp;` is decoded.
#[must_use]
pub fn extract_links(html: &str) -> Vec<String> {
    let mut out = Vec::new();
    for attr in [" href=\"", " src=\""] {
        let mut rest = html;
        while let Some(start) = rest.find(attr) {
            rest = &rest[start + attr.len()..];
            let Some(end) = rest.find('"') else { break };
            out.push(rest[..end].replace("&amp;", "&"));
            rest = &rest[end..];
        }
    }
    out
}

/// A rendered page covered by the audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditedPage {
    Route(Route),
    /// The page served for unknown paths.
    NotFound,
}

impl AuditedPage {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Route(route) => route.path(),
            Self::NotFound => "(404)",
        }
    }

    const fn route(self) -> Option<Route> {
        match self {
            Self::Route(route) => Some(route),
            Self::NotFound => None,
        }
    }
}

/// One link found during an audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    /// Page the link appears on.
    pub page: AuditedPage,
    pub href: String,
    pub target: LinkTarget,
}

/// Render every page, including the 404 page, and classify every link on it.
#[must_use]
pub fn audit_site(ctx: &RenderContext) -> Vec<LinkReport> {
    let pages = Route::ALL
        .into_iter()
        .map(|route| (AuditedPage::Route(route), render(route, ctx)))
        .chain([(AuditedPage::NotFound, render_not_found(ctx.year))]);

    let mut reports = Vec::new();
    for (page, html) in pages {
        for href in extract_links(&html) {
            let target = classify(&href, page.route());
            if !target.is_resolved() {
                tracing::warn!(page = page.path(), href = %href, "unresolved link");
            }
            reports.push(LinkReport { page, href, target });
        }
    }
    reports
}
