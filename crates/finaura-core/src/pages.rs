//! Page routes and their rendering.
//!
//! Each page is rendered into the shared root layout: header, the page body
//! inside `<main>`, footer. Rendering is a pure function of the [`Route`]
//! and the [`RenderContext`].

use chrono::Datelike;
use serde::Serialize;

use crate::components::{button, container, footer, header, section, ButtonVariant, BRAND, TAGLINE};
use crate::content::{
    self, MarketingContent, HOW_IT_WORKS_ANCHOR, MARKETING, MODULES_ANCHOR, SIGNUP_ANCHOR,
};
use crate::escape::{escape_attr, escape_text};

/// Target of the "learn more" button in the CTA strip. No page exists yet.
const LEARN_MORE_PATH: &str = "/so-funktionierts";

/// An implemented page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    Website,
    Impressum,
    Privacy,
    AvVorbezug,
}

/// Indexing directive for search engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Robots {
    IndexFollow,
    NoindexFollow,
}

impl Robots {
    /// Value of the `robots` meta tag, if one should be emitted.
    #[must_use]
    pub const fn meta(self) -> Option<&'static str> {
        match self {
            Self::IndexFollow => None,
            Self::NoindexFollow => Some("noindex, follow"),
        }
    }
}

impl Route {
    /// Every implemented page, in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Website,
        Self::Impressum,
        Self::Privacy,
        Self::AvVorbezug,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Website => "/website",
            Self::Impressum => "/impressum",
            Self::Privacy => "/privacy",
            Self::AvVorbezug => "/av-vorbezug",
        }
    }

    /// Look up a route by exact request path, as the server matches it.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    /// Document title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "FINAURA — Schweizer Finanzklarheit",
            Self::Website => "FINAURA — Website",
            Self::Impressum => "Impressum – FINAURA",
            Self::Privacy => "Datenschutz – FINAURA",
            Self::AvVorbezug => "AV-Vorbezug – FINAURA (Free Tool, Beta)",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Home => {
                "FINAURA: Schweizer Finanzklarheit, anonym und neutral. Verstehe deine \
                 Finanzen ohne Datenpreisgabe, ohne Verkaufsdruck."
            }
            Self::Website => {
                "Schweizer Finanzklarheit – anonym, neutral und verständlich. Starte ohne Login."
            }
            Self::Impressum => "Impressum von FINAURA.",
            Self::Privacy => "Datenschutzerklärung von FINAURA.",
            Self::AvVorbezug => "Kostenloses Tool zum AV-Vorbezug – in Kürze verfügbar.",
        }
    }

    /// Text of the page's `<h1>`.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Home | Self::Website => MARKETING.heading,
            Self::Impressum => "Impressum",
            Self::Privacy => "Datenschutz",
            Self::AvVorbezug => "AV-Vorbezug (Free) – Beta",
        }
    }

    #[must_use]
    pub const fn robots(self) -> Robots {
        match self {
            Self::AvVorbezug => Robots::NoindexFollow,
            _ => Robots::IndexFollow,
        }
    }

    /// Ids of the anchor targets on this page.
    #[must_use]
    pub const fn anchors(self) -> &'static [&'static str] {
        match self {
            Self::Home | Self::Website => &[HOW_IT_WORKS_ANCHOR, MODULES_ANCHOR, SIGNUP_ANCHOR],
            _ => &[],
        }
    }
}

/// Per-render inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Calendar year shown in the footer.
    pub year: i32,
    /// Target of the mailing-list form.
    pub form_endpoint: String,
}

impl RenderContext {
    /// Context for a render happening now.
    #[must_use]
    pub fn now(form_endpoint: impl Into<String>) -> Self {
        Self {
            year: chrono::Local::now().year(),
            form_endpoint: form_endpoint.into(),
        }
    }

    /// Context with a fixed year.
    #[must_use]
    pub fn with_year(year: i32, form_endpoint: impl Into<String>) -> Self {
        Self {
            year,
            form_endpoint: form_endpoint.into(),
        }
    }
}

/// Render a full HTML document for `route`.
#[must_use]
pub fn render(route: Route, ctx: &RenderContext) -> String {
    let body = match route {
        Route::Home | Route::Website => marketing_page(&MARKETING, ctx),
        Route::Impressum => legal_page(route.heading(), content::IMPRESSUM_PARAGRAPHS),
        Route::Privacy => legal_page(route.heading(), content::PRIVACY_PARAGRAPHS),
        Route::AvVorbezug => av_vorbezug_page(),
    };
    layout(
        route.title(),
        route.description(),
        route.robots(),
        &body,
        ctx.year,
    )
}

/// Render the page shown for paths that have no page.
#[must_use]
pub fn render_not_found(year: i32) -> String {
    let inner = format!(
        "<h1>Seite nicht gefunden</h1>\
         <p class=\"muted\">Diese Seite gibt es (noch) nicht. Einige Module sind in Vorbereitung.</p>\
         <div class=\"actions\">{}</div>",
        button(Some("/"), "Zur Startseite", ButtonVariant::Primary)
    );
    let body = section(None, None, &container(Some("narrow"), &inner));
    layout(
        "Seite nicht gefunden – FINAURA",
        "Diese Seite existiert nicht.",
        Robots::NoindexFollow,
        &body,
        year,
    )
}

/// The mailing-list signup form.
///
/// Posts straight to `endpoint`; nothing on this side handles the result.
#[must_use]
pub fn signup_form(endpoint: &str) -> String {
    format!(
        "<form class=\"signup-form\" method=\"post\" action=\"{}\">\
         <label for=\"signup-email\" class=\"sr-only\">E-Mail-Adresse</label>\
         <input id=\"signup-email\" type=\"email\" name=\"email\" required \
         autocomplete=\"email\" placeholder=\"deine@email.ch\"/>\
         <button type=\"submit\" class=\"btn-primary\">Eintragen</button>\
         </form>",
        escape_attr(endpoint)
    )
}

fn layout(title: &str, description: &str, robots: Robots, body: &str, year: i32) -> String {
    let mut s = String::with_capacity(body.len() + 2048);
    s.push_str("<!DOCTYPE html>\n<html lang=\"de\"><head><meta charset=\"utf-8\"/>");
    s.push_str("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\"/>");
    s.push_str("<title>");
    s.push_str(&escape_text(title));
    s.push_str("</title><meta name=\"description\" content=\"");
    s.push_str(&escape_attr(description));
    s.push_str("\"/>");
    if let Some(robots) = robots.meta() {
        s.push_str("<meta name=\"robots\" content=\"");
        s.push_str(robots);
        s.push_str("\"/>");
    }
    s.push_str("<link rel=\"icon\" href=\"/logo.svg\" type=\"image/svg+xml\"/>");
    s.push_str("<link rel=\"stylesheet\" href=\"/styles.css\"/></head>\n<body class=\"page\">");
    s.push_str(&header());
    s.push_str("<main class=\"site-main\">");
    s.push_str(body);
    s.push_str("</main>");
    s.push_str(&footer(year));
    s.push_str("</body></html>\n");
    s
}

fn marketing_page(c: &MarketingContent, ctx: &RenderContext) -> String {
    let mut s = String::with_capacity(16384);
    let signup_href = format!("/#{SIGNUP_ANCHOR}");
    let how_href = format!("/#{HOW_IT_WORKS_ANCHOR}");

    // Hero
    let trust = c
        .trust
        .iter()
        .map(|t| format!("<span>{}</span>", escape_text(t)))
        .collect::<Vec<_>>()
        .join("<span aria-hidden=\"true\">•</span>");
    let hero = format!(
        "<div class=\"hero-copy\"><span class=\"badge\">{badge}</span><h1>{heading}</h1>\
         <p class=\"lead\">{lead}</p><div class=\"actions\">{start}{how}</div>\
         <div class=\"trust\">{trust}</div></div>\
         <img class=\"hero-image\" src=\"/hero.svg\" alt=\"{brand} — {tagline}\" width=\"480\" height=\"360\"/>",
        badge = escape_text(c.badge),
        heading = escape_text(c.heading),
        lead = escape_text(c.lead),
        start = button(Some(&signup_href), "Jetzt anonym starten", ButtonVariant::Primary),
        how = button(Some(&how_href), "So funktioniert’s", ButtonVariant::Secondary),
        brand = BRAND,
        tagline = TAGLINE,
    );
    s.push_str(&section(None, Some("hero"), &container(Some("hero-grid"), &hero)));

    // Value proposition
    let mut cards = String::from("<div class=\"grid grid-3\">");
    for card in c.values {
        cards.push_str(&format!(
            "<div class=\"card\"><h3>{}</h3><p>{}</p></div>",
            escape_text(card.title),
            escape_text(card.text)
        ));
    }
    cards.push_str("</div>");
    s.push_str(&section(None, Some("values"), &container(None, &cards)));

    // How it works
    let mut steps = format!("<h2>{}</h2><ol class=\"steps\">", escape_text(c.steps_heading));
    for (i, step) in c.steps.iter().enumerate() {
        steps.push_str(&format!(
            "<li><span class=\"step-number\">{}</span><h3>{}</h3><p>{}</p></li>",
            i + 1,
            escape_text(step.title),
            escape_text(step.text)
        ));
    }
    steps.push_str("</ol>");
    s.push_str(&section(Some(HOW_IT_WORKS_ANCHOR), Some("muted-bg"), &container(None, &steps)));

    // Module overview
    let mut modules = format!(
        "<h2>{}</h2><p class=\"muted\">{}</p><div class=\"grid grid-3\">",
        escape_text(c.modules_heading),
        escape_text(c.modules_lead)
    );
    for m in c.modules {
        modules.push_str(&format!(
            "<a href=\"{}\" class=\"card module-card\"><div class=\"card-head\"><h3>{}</h3>\
             <span class=\"pill\">Öffnen</span></div><p>{}</p><div class=\"more\">Weiter →</div></a>",
            escape_attr(m.href),
            escape_text(m.title),
            escape_text(m.text)
        ));
    }
    modules.push_str("</div>");
    s.push_str(&section(Some(MODULES_ANCHOR), None, &container(None, &modules)));

    // Mailing list
    let signup = format!(
        "<h2>{}</h2><p class=\"muted\">{}</p>{}<p class=\"fine-print\">{}</p>",
        escape_text(c.signup_heading),
        escape_text(c.signup_lead),
        signup_form(&ctx.form_endpoint),
        escape_text(c.signup_note)
    );
    s.push_str(&section(Some(SIGNUP_ANCHOR), None, &container(Some("narrow"), &signup)));

    // Call to action
    let cta = format!(
        "<div class=\"cta-strip\"><div><h3>{}</h3><p>{}</p></div><div class=\"actions\">{}{}</div></div>",
        escape_text(c.cta_heading),
        escape_text(c.cta_lead),
        button(Some(&signup_href), "Jetzt anonym starten", ButtonVariant::Primary),
        button(Some(LEARN_MORE_PATH), "Mehr erfahren", ButtonVariant::Secondary),
    );
    s.push_str(&section(None, Some("cta"), &container(None, &cta)));

    s
}

fn legal_page(heading: &str, paragraphs: &[&str]) -> String {
    let mut inner = format!("<h1>{}</h1>", escape_text(heading));
    for p in paragraphs {
        inner.push_str("<p>");
        inner.push_str(&escape_text(p));
        inner.push_str("</p>");
    }
    section(None, None, &container(Some("narrow"), &inner))
}

fn av_vorbezug_page() -> String {
    let inner = format!(
        "<h1>{}</h1><p class=\"muted\">{}</p><hr/><p>{}</p>",
        escape_text(Route::AvVorbezug.heading()),
        escape_text(content::AV_VORBEZUG_LEAD),
        escape_text(content::AV_VORBEZUG_NOTE)
    );
    section(None, None, &container(Some("narrow"), &inner))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "https://forms.example.test/f/abc";

    fn ctx() -> RenderContext {
        RenderContext::with_year(2025, ENDPOINT)
    }

    #[test]
    fn from_path_round_trips() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/privacy/"), None);
        assert_eq!(Route::from_path("/ik"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn every_page_has_title_and_heading() {
        let ctx = ctx();
        for route in Route::ALL {
            let html = render(route, &ctx);
            assert!(
                html.contains(&format!("<title>{}</title>", route.title())),
                "{route:?} title"
            );
            assert!(
                html.contains(&format!("<h1>{}</h1>", route.heading())),
                "{route:?} heading"
            );
            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(html.contains("<html lang=\"de\">"));
        }
    }

    #[test]
    fn home_and_website_share_body() {
        let ctx = ctx();
        let home = render(Route::Home, &ctx);
        let website = render(Route::Website, &ctx);
        let body = |s: &str| s.split_once("<main").map(|(_, b)| b.to_owned());
        assert_eq!(body(&home), body(&website));
        assert_ne!(home, website);
    }

    #[test]
    fn marketing_page_carries_anchors() {
        let html = render(Route::Home, &ctx());
        for anchor in Route::Home.anchors() {
            assert!(html.contains(&format!("id=\"{anchor}\"")), "{anchor}");
        }
    }

    #[test]
    fn steps_are_numbered() {
        let html = render(Route::Home, &ctx());
        let list = html
            .split_once("<ol class=\"steps\">")
            .and_then(|(_, rest)| rest.split_once("</ol>"))
            .map(|(list, _)| list)
            .unwrap();
        for (i, step) in MARKETING.steps.iter().enumerate() {
            assert!(list.contains(&format!("<span class=\"step-number\">{}</span><h3>{}</h3>", i + 1, step.title)));
        }
    }

    #[test]
    fn signup_form_contract() {
        let html = signup_form(ENDPOINT);
        assert!(html.contains("method=\"post\""));
        assert!(html.contains(&format!("action=\"{ENDPOINT}\"")));
        assert_eq!(html.matches("<input").count(), 1);
        assert_eq!(html.matches(" required").count(), 1);
        assert!(html.contains("name=\"email\""));
    }

    #[test]
    fn only_stub_is_noindex() {
        let ctx = ctx();
        for route in Route::ALL {
            let html = render(route, &ctx);
            let noindex = html.contains("<meta name=\"robots\" content=\"noindex, follow\"/>");
            assert_eq!(noindex, route == Route::AvVorbezug, "{route:?}");
        }
    }

    #[test]
    fn footer_year_follows_context() {
        let html = render(Route::Impressum, &RenderContext::with_year(2042, ENDPOINT));
        assert!(html.contains("© 2042 FINAURA"));
    }

    #[test]
    fn now_uses_current_year() {
        let before = chrono::Local::now().year();
        let ctx = RenderContext::now(ENDPOINT);
        let after = chrono::Local::now().year();
        assert!(ctx.year == before || ctx.year == after);
    }

    #[test]
    fn not_found_page_is_noindex() {
        let html = render_not_found(2025);
        assert!(html.contains("<h1>Seite nicht gefunden</h1>"));
        assert!(html.contains("noindex, follow"));
    }
}
