//! Static assets compiled into the binary: logo, hero image, stylesheet.

/// A static asset with its content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub path: &'static str,
    pub content_type: &'static str,
    pub body: &'static str,
}

/// All embedded assets.
pub static ASSETS: [Asset; 3] = [
    Asset {
        path: "/logo.svg",
        content_type: "image/svg+xml",
        body: LOGO_SVG,
    },
    Asset {
        path: "/hero.svg",
        content_type: "image/svg+xml",
        body: HERO_SVG,
    },
    Asset {
        path: "/styles.css",
        content_type: "text/css; charset=utf-8",
        body: STYLES_CSS,
    },
];

/// Look up an embedded asset by request path.
#[must_use]
pub fn find(path: &str) -> Option<&'static Asset> {
    ASSETS.iter().find(|a| a.path == path)
}

const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32" fill="none"><defs><linearGradient id="fg" x1="0" y1="0" x2="32" y2="32"><stop offset="0%" stop-color="#0A5DFF"/><stop offset="100%" stop-color="#0847C6"/></linearGradient></defs><rect width="32" height="32" rx="8" fill="url(#fg)"/><path d="M11 23V9h11M11 16h8" stroke="#fff" stroke-width="2.6" stroke-linecap="round" stroke-linejoin="round"/></svg>
"##;

const HERO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 480 360" fill="none"><rect width="480" height="360" rx="24" fill="#E8F0FF"/><rect x="40" y="48" width="400" height="264" rx="18" fill="#fff" stroke="#D6E2FF"/><rect x="72" y="84" width="140" height="14" rx="7" fill="#0A5DFF" opacity=".85"/><rect x="72" y="110" width="220" height="10" rx="5" fill="#CBD5E1"/><path d="M80 262l60-48 52 30 70-74 64 40 70-62" stroke="#0A5DFF" stroke-width="4" stroke-linecap="round" stroke-linejoin="round"/><circle cx="262" cy="170" r="7" fill="#0847C6"/><rect x="330" y="84" width="78" height="34" rx="10" fill="#E8F0FF"/><path d="M348 101h42" stroke="#0847C6" stroke-width="3" stroke-linecap="round"/></svg>
"##;

const STYLES_CSS: &str = r"*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{--brand:#0A5DFF;--brand-dark:#0847C6;--brand-light:#E8F0FF;--text:#0F172A;--muted:#5F6B7A;--line:#E5E7EB;--card:#fff;--shadow-soft:0 10px 30px rgba(0,0,0,.06);--radius:1.25rem;--font:ui-sans-serif,system-ui,'Segoe UI',Roboto,Helvetica,Arial,sans-serif}
body.page{min-height:100vh;display:flex;flex-direction:column;font-family:var(--font);color:var(--text);background:#fff;line-height:1.6;-webkit-font-smoothing:antialiased}
a{color:inherit;text-decoration:none}
h1{font-size:2.5rem;line-height:1.15;letter-spacing:-.02em;font-weight:600;margin-bottom:1rem}
h2{font-size:1.75rem;font-weight:600;margin-bottom:.5rem}
h3{font-size:1rem;font-weight:600}
hr{border:0;border-top:1px solid #E8EDF5;margin:18px 0 24px}
.container{max-width:72rem;margin:0 auto;padding:0 1rem}
.container.narrow{max-width:56rem}
.section{padding:4rem 0}
.site-main{flex:1}
.site-header{position:sticky;top:0;z-index:40;backdrop-filter:blur(8px);background:rgba(255,255,255,.8);border-bottom:1px solid #F3F4F6}
.header-bar{display:flex;height:4rem;align-items:center;justify-content:space-between}
.brand{display:flex;align-items:center;gap:.75rem}
.brand-name{font-weight:600}
.site-nav{display:flex;align-items:center;gap:1.5rem;font-size:.875rem;color:#374151}
.nav-link:hover{color:#111827}
.site-footer{border-top:1px solid #F3F4F6;margin-top:4rem}
.footer-bar{padding-top:2.5rem;padding-bottom:2.5rem;display:flex;align-items:center;justify-content:space-between;gap:1rem;font-size:.875rem;color:#4B5563}
.footer-links{display:flex;align-items:center;gap:1rem}
.link:hover{text-decoration:underline}
.release{color:#9CA3AF}
.btn-primary,.btn-secondary{display:inline-flex;align-items:center;justify-content:center;border-radius:.75rem;padding:.75rem 1.25rem;font-weight:500;border:1px solid transparent;cursor:pointer;font:inherit;transition:background .15s}
.btn-primary{background:var(--brand);color:#fff}.btn-primary:hover{background:var(--brand-dark)}
.btn-secondary{background:#fff;color:var(--text);border-color:#E2E8F0}.btn-secondary:hover{background:#F8FAFC}
.btn-sm{padding:.4rem .9rem;font-size:.875rem}
.hero{background:linear-gradient(to bottom,rgba(239,246,255,.6),transparent)}
.hero-grid{display:grid;grid-template-columns:3fr 2fr;gap:2.5rem;align-items:center}
.hero-image{width:100%;height:auto}
.badge{display:inline-flex;border-radius:999px;border:1px solid #BFDBFE;background:#EFF6FF;padding:.25rem .75rem;font-size:.75rem;font-weight:500;color:#1D4ED8;margin-bottom:1rem}
.lead{color:var(--muted);max-width:42rem}
.actions{display:flex;flex-wrap:wrap;gap:.75rem;margin-top:2rem}
.trust{display:flex;flex-wrap:wrap;gap:1rem;margin-top:1.5rem;font-size:.75rem;color:#64748B}
.grid{display:grid;gap:1.5rem;margin-top:1.5rem}
.grid-3{grid-template-columns:repeat(3,minmax(0,1fr))}
.card{display:block;border:1px solid var(--line);border-radius:1rem;padding:1.5rem;background:var(--card);box-shadow:var(--shadow-soft)}
.card p{margin-top:.5rem;color:var(--muted);font-size:.875rem}
.module-card{transition:transform .15s,box-shadow .15s}.module-card:hover{transform:translateY(-2px)}
.card-head{display:flex;align-items:flex-start;justify-content:space-between}
.pill{border:1px solid #E2E8F0;border-radius:999px;padding:.15rem .5rem;font-size:.625rem;color:#64748B}
.more{margin-top:1rem;font-size:.875rem;font-weight:500;color:#1D4ED8}
.muted{color:var(--muted)}
.muted-bg{background:#F8FAFC}
.steps{list-style:none;display:grid;grid-template-columns:repeat(3,minmax(0,1fr));gap:1.5rem;margin-top:1.5rem}
.steps p{color:var(--muted);font-size:.875rem;margin-top:.25rem}
.step-number{display:inline-flex;width:2rem;height:2rem;border-radius:999px;align-items:center;justify-content:center;background:var(--brand-light);color:var(--brand-dark);font-weight:600;margin-bottom:.5rem}
.signup-form{display:flex;gap:.75rem;margin-top:1.5rem}
.signup-form input{flex:1;border:1px solid #CBD5E1;border-radius:.75rem;padding:.75rem 1rem;font:inherit}
.fine-print{margin-top:.75rem;font-size:.75rem;color:#94A3B8}
.cta-strip{display:flex;align-items:center;justify-content:space-between;gap:1rem;border-radius:1rem;padding:2rem;color:#fff;background:linear-gradient(to right,#2563EB,#3B82F6)}
.cta-strip p{color:#DBEAFE;margin-top:.25rem}
.cta-strip .actions{margin-top:0}
.sr-only{position:absolute;width:1px;height:1px;overflow:hidden;clip:rect(0,0,0,0);white-space:nowrap}
@media(max-width:900px){.grid-3,.steps,.hero-grid{grid-template-columns:1fr}.site-nav .nav-link{display:none}.cta-strip,.footer-bar,.signup-form{flex-direction:column;align-items:stretch}}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_known_and_unknown() {
        assert_eq!(find("/logo.svg").map(|a| a.content_type), Some("image/svg+xml"));
        assert!(find("/styles.css").is_some_and(|a| a.body.contains(".btn-primary")));
        assert!(find("/favicon.ico").is_none());
    }

    #[test]
    fn asset_paths_are_root_level() {
        for asset in &ASSETS {
            assert!(asset.path.starts_with('/'));
            assert_eq!(asset.path.matches('/').count(), 1, "{}", asset.path);
        }
    }

    #[test]
    fn stylesheet_defines_both_button_variants() {
        assert!(STYLES_CSS.contains(".btn-primary{"));
        assert!(STYLES_CSS.contains(".btn-secondary{"));
    }
}
