//! Reusable layout components.
//!
//! Every component is a plain function from its inputs to an HTML fragment.
//! Fragments passed in as `content` are trusted markup produced by other
//! components; plain text inputs (labels, ids, hrefs) are escaped here.

use crate::escape::{escape_attr, escape_text};

/// Brand name shown in the header, footer and document titles.
pub const BRAND: &str = "FINAURA";

/// Tagline shared by the footer and the default document title.
pub const TAGLINE: &str = "Schweizer Finanzklarheit";

/// Site release shown in the footer.
pub const SITE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Date of the current site release.
pub const RELEASE_DATE: &str = "2025-10-22";

/// A navigation link: visible label plus target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Header navigation, left to right.
pub const HEADER_LINKS: [NavLink; 3] = [
    NavLink {
        label: "So funktioniert’s",
        href: "/#wie-es-funktioniert",
    },
    NavLink {
        label: "Datenschutz",
        href: "/privacy",
    },
    NavLink {
        label: "Impressum",
        href: "/impressum",
    },
];

/// Call to action at the right end of the header.
pub const HEADER_CTA: NavLink = NavLink {
    label: "Jetzt anonym starten",
    href: "/#start-anonym",
};

/// Footer links.
pub const FOOTER_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Datenschutz",
        href: "/privacy",
    },
    NavLink {
        label: "Impressum",
        href: "/impressum",
    },
];

/// Visual style of a [`button`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    /// CSS class for this variant.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Secondary => "btn-secondary",
        }
    }
}

/// Center `content` horizontally with the site's max width and padding.
///
/// `class` is appended after the default `container` class.
#[must_use]
pub fn container(class: Option<&str>, content: &str) -> String {
    let mut s = String::with_capacity(content.len() + 64);
    s.push_str("<div class=\"");
    push_classes(&mut s, "container", class);
    s.push_str("\">");
    s.push_str(content);
    s.push_str("</div>");
    s
}

/// Wrap `content` in a vertically padded `<section>`.
///
/// `id` makes the section addressable as an anchor target.
#[must_use]
pub fn section(id: Option<&str>, class: Option<&str>, content: &str) -> String {
    let mut s = String::with_capacity(content.len() + 96);
    s.push_str("<section");
    if let Some(id) = id {
        s.push_str(" id=\"");
        s.push_str(&escape_attr(id));
        s.push('"');
    }
    s.push_str(" class=\"");
    push_classes(&mut s, "section", class);
    s.push_str("\">");
    s.push_str(content);
    s.push_str("</section>");
    s
}

/// Render a link styled as a button.
///
/// A missing `href` renders the `#` placeholder; such a button goes nowhere.
#[must_use]
pub fn button(href: Option<&str>, label: &str, variant: ButtonVariant) -> String {
    let href = href.unwrap_or("#");
    let mut s = String::with_capacity(96);
    s.push_str("<a href=\"");
    s.push_str(&escape_attr(href));
    s.push_str("\" class=\"");
    s.push_str(variant.class());
    s.push_str("\">");
    s.push_str(&escape_text(label));
    s.push_str("</a>");
    s
}

/// Site header: logo, brand link, navigation and call to action.
#[must_use]
pub fn header() -> String {
    let mut nav = String::with_capacity(512);
    for link in &HEADER_LINKS {
        nav.push_str(&nav_link(link, "nav-link"));
    }
    nav.push_str(&nav_link(&HEADER_CTA, "btn-primary btn-sm"));

    let mut inner = String::with_capacity(1024);
    inner.push_str("<div class=\"brand\"><img src=\"/logo.svg\" alt=\"");
    inner.push_str(BRAND);
    inner.push_str("\" width=\"28\" height=\"28\"/><a href=\"/\" class=\"brand-name\">");
    inner.push_str(BRAND);
    inner.push_str("</a></div><nav class=\"site-nav\">");
    inner.push_str(&nav);
    inner.push_str("</nav>");

    let mut s = String::with_capacity(inner.len() + 64);
    s.push_str("<header class=\"site-header\">");
    s.push_str(&container(Some("header-bar"), &inner));
    s.push_str("</header>");
    s
}

/// Site footer with the copyright line for `year`.
#[must_use]
pub fn footer(year: i32) -> String {
    let mut links = String::with_capacity(256);
    for link in &FOOTER_LINKS {
        links.push_str(&nav_link(link, "link"));
    }

    let inner = format!(
        "<div class=\"copyright\">© {year} {BRAND} — {TAGLINE}</div>\
         <div class=\"footer-links\">{links}<span class=\"release\">v{SITE_VERSION} · {RELEASE_DATE}</span></div>"
    );

    let mut s = String::with_capacity(inner.len() + 64);
    s.push_str("<footer class=\"site-footer\">");
    s.push_str(&container(Some("footer-bar"), &inner));
    s.push_str("</footer>");
    s
}

fn nav_link(link: &NavLink, class: &str) -> String {
    format!(
        "<a href=\"{}\" class=\"{class}\">{}</a>",
        escape_attr(link.href),
        escape_text(link.label)
    )
}

fn push_classes(s: &mut String, base: &str, extra: Option<&str>) {
    s.push_str(base);
    if let Some(extra) = extra.filter(|c| !c.trim().is_empty()) {
        s.push(' ');
        s.push_str(&escape_attr(extra.trim()));
    }
}
