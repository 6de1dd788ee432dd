//! Static export: write every page and asset to a directory.
//!
//! Layout mirrors the URL space so any static file host can serve the
//! result: `/` becomes `index.html`, `/privacy` becomes
//! `privacy/index.html`. The not-found page is written to `404.html`.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::assets::ASSETS;
use crate::error::ExportError;
use crate::pages::{render, render_not_found, RenderContext, Route};
use crate::seo;

/// Name of the manifest written next to the exported files.
pub const MANIFEST_FILE: &str = "manifest.json";

/// What an export produced.
#[derive(Debug, Clone, Serialize)]
pub struct ExportManifest {
    pub site_url: String,
    pub year: i32,
    pub files: Vec<ExportedFile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportedFile {
    /// URL path the file answers.
    pub url: String,
    /// Path relative to the export directory, `/`-separated.
    pub file: String,
    pub bytes: usize,
}

/// Relative file path for `route` inside the export directory.
#[must_use]
pub fn file_for_route(route: Route) -> String {
    match route.path().trim_start_matches('/') {
        "" => "index.html".to_owned(),
        p => format!("{p}/index.html"),
    }
}

/// Render the whole site into `out_dir`, creating it if needed.
///
/// # Errors
///
/// Returns [`ExportError`] if `out_dir` is not a directory or a file cannot
/// be written.
pub fn export_site(
    out_dir: &Path,
    ctx: &RenderContext,
    site_url: &str,
) -> Result<ExportManifest, ExportError> {
    if out_dir.exists() && !out_dir.is_dir() {
        return Err(ExportError::NotADirectory {
            path: out_dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    for route in Route::ALL {
        let file = file_for_route(route);
        let html = render(route, ctx);
        write(out_dir, &file, &html)?;
        files.push(ExportedFile {
            url: route.path().to_owned(),
            file,
            bytes: html.len(),
        });
    }

    let not_found = render_not_found(ctx.year);
    write(out_dir, "404.html", &not_found)?;
    files.push(ExportedFile {
        url: "/404".to_owned(),
        file: "404.html".to_owned(),
        bytes: not_found.len(),
    });

    for asset in &ASSETS {
        let file = asset.path.trim_start_matches('/');
        write(out_dir, file, asset.body)?;
        files.push(ExportedFile {
            url: asset.path.to_owned(),
            file: file.to_owned(),
            bytes: asset.body.len(),
        });
    }

    for (url, body) in [
        ("/robots.txt", seo::robots_txt(site_url)),
        ("/sitemap.xml", seo::sitemap_xml(site_url)),
    ] {
        let file = url.trim_start_matches('/');
        write(out_dir, file, &body)?;
        files.push(ExportedFile {
            url: url.to_owned(),
            file: file.to_owned(),
            bytes: body.len(),
        });
    }

    let manifest = ExportManifest {
        site_url: site_url.to_owned(),
        year: ctx.year,
        files,
    };
    let json = serde_json::to_string_pretty(&manifest)?;
    write(out_dir, MANIFEST_FILE, &json)?;

    info!(dir = %out_dir.display(), files = manifest.files.len(), "site exported");
    Ok(manifest)
}

fn write(root: &Path, relative: &str, contents: &str) -> Result<(), ExportError> {
    let path: PathBuf = relative.split('/').fold(root.to_path_buf(), |p, c| p.join(c));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ExportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(&path, contents).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "wrote file");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        RenderContext::with_year(2025, "https://forms.example.test/f/abc")
    }

    #[test]
    fn route_file_names() {
        assert_eq!(file_for_route(Route::Home), "index.html");
        assert_eq!(file_for_route(Route::AvVorbezug), "av-vorbezug/index.html");
    }

    #[test]
    fn export_writes_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = export_site(dir.path(), &ctx(), "https://finaura.ch").unwrap();

        for route in Route::ALL {
            let html = std::fs::read_to_string(dir.path().join(file_for_route(route))).unwrap();
            assert!(html.contains(route.title()));
        }
        assert!(dir.path().join("404.html").is_file());
        assert!(dir.path().join("logo.svg").is_file());
        assert!(dir.path().join("sitemap.xml").is_file());

        let written: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap(),
        )
        .unwrap();
        assert_eq!(written["files"].as_array().unwrap().len(), manifest.files.len());
    }

    #[test]
    fn export_into_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taken");
        std::fs::write(&file, "x").unwrap();
        let err = export_site(&file, &ctx(), "https://finaura.ch").unwrap_err();
        assert!(matches!(err, ExportError::NotADirectory { .. }));
    }
}
