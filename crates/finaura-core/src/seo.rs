//! `robots.txt` and `sitemap.xml`.

use crate::escape::escape_text;
use crate::pages::{Robots, Route};

/// Routes that search engines may index.
pub fn indexable_routes() -> impl Iterator<Item = Route> {
    Route::ALL
        .into_iter()
        .filter(|r| r.robots() == Robots::IndexFollow)
}

/// Absolute URL of `route` under `site_url`.
#[must_use]
pub fn absolute_url(site_url: &str, route: Route) -> String {
    format!("{}{}", site_url.trim_end_matches('/'), route.path())
}

/// Sitemap listing every indexable route.
#[must_use]
pub fn sitemap_xml(site_url: &str) -> String {
    let mut s = String::with_capacity(1024);
    s.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    s.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for route in indexable_routes() {
        s.push_str("  <url><loc>");
        s.push_str(&escape_text(&absolute_url(site_url, route)));
        s.push_str("</loc></url>\n");
    }
    s.push_str("</urlset>\n");
    s
}

/// `robots.txt` allowing everything and pointing at the sitemap.
#[must_use]
pub fn robots_txt(site_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        site_url.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sitemap_skips_noindex_pages() {
        let xml = sitemap_xml("https://finaura.ch/");
        assert!(xml.contains("<loc>https://finaura.ch/</loc>"));
        assert!(xml.contains("<loc>https://finaura.ch/impressum</loc>"));
        assert!(!xml.contains("av-vorbezug"));
        assert_eq!(xml.matches("<url>").count(), 4);
    }

    #[test]
    fn robots_points_at_sitemap() {
        assert_eq!(
            robots_txt("https://finaura.ch"),
            "User-agent: *\nAllow: /\n\nSitemap: https://finaura.ch/sitemap.xml\n"
        );
    }
}
