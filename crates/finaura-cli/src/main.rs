//! `finaura` CLI — offline tooling for the FINAURA site.
//!
//! Lists the routes, audits every internal link in the rendered pages, and
//! exports the whole site as static HTML. Renders through `finaura-core`
//! directly; no server needs to be running.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use finaura_core::export::export_site;
use finaura_core::links::{audit_site, is_absolute_http_url, LinkTarget, PLACEHOLDER_PATHS};
use finaura_core::{RenderContext, Route, DEFAULT_FORM_ENDPOINT, DEFAULT_SITE_URL};

// ── ANSI color helpers ───────────────────────────────────────────────

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

// ── CLI structure ────────────────────────────────────────────────────

/// FINAURA — Schweizer Finanzklarheit.
#[derive(Parser)]
#[command(
    name = "finaura",
    version,
    about = "FINAURA site tooling — list routes, audit links, export static HTML",
    long_about = None,
    after_help = format!(
        "{DIM}Environment variables:{RESET}\n  \
         FINAURA_FORM_ENDPOINT   Mailing-list form target\n  \
         FINAURA_SITE_URL        Canonical origin for sitemap.xml\n\n\
         {DIM}Examples:{RESET}\n  \
         finaura routes\n  \
         finaura links --json\n  \
         finaura export ./dist --site-url https://finaura.ch"
    ),
)]
struct Cli {
    /// Mailing-list form target written into the signup form.
    #[arg(long, global = true, env = "FINAURA_FORM_ENDPOINT", default_value = DEFAULT_FORM_ENDPOINT)]
    form_endpoint: String,

    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true, default_value = "false")]
    json: bool,

    /// Disable colored output.
    #[arg(long, global = true, default_value = "false")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List implemented routes and documented placeholder paths.
    Routes,
    /// Check that every internal link resolves to a page, anchor, asset or placeholder.
    Links,
    /// Render every page and asset into a directory.
    Export {
        /// Output directory (created if missing).
        dir: PathBuf,
        /// Canonical origin for `sitemap.xml` and `robots.txt`.
        #[arg(long, env = "FINAURA_SITE_URL", default_value = DEFAULT_SITE_URL)]
        site_url: String,
        /// Year shown in the footer (default: current year).
        #[arg(long)]
        year: Option<i32>,
    },
}

/// Color palette, blanked out with `--no-color`.
struct Palette {
    reset: &'static str,
    bold: &'static str,
    dim: &'static str,
    red: &'static str,
    green: &'static str,
    yellow: &'static str,
}

impl Palette {
    const fn new(enabled: bool) -> Self {
        if enabled {
            Self {
                reset: RESET,
                bold: BOLD,
                dim: DIM,
                red: RED,
                green: GREEN,
                yellow: YELLOW,
            }
        } else {
            Self {
                reset: "",
                bold: "",
                dim: "",
                red: "",
                green: "",
                yellow: "",
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let palette = Palette::new(!cli.no_color);
    match run(&cli, &palette) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}error:{} {e:#}", palette.red, palette.reset);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, p: &Palette) -> Result<ExitCode> {
    match &cli.command {
        Commands::Routes => cmd_routes(cli.json, p),
        Commands::Links => cmd_links(&cli.form_endpoint, cli.json, p),
        Commands::Export {
            dir,
            site_url,
            year,
        } => cmd_export(dir, site_url, *year, &cli.form_endpoint, cli.json, p),
    }
}

// ── routes ───────────────────────────────────────────────────────────

#[derive(Serialize)]
struct RouteListing {
    routes: Vec<RouteEntry>,
    placeholders: Vec<&'static str>,
}

#[derive(Serialize)]
struct RouteEntry {
    path: &'static str,
    title: &'static str,
    indexable: bool,
}

fn cmd_routes(json: bool, p: &Palette) -> Result<ExitCode> {
    let listing = RouteListing {
        routes: Route::ALL
            .into_iter()
            .map(|r| RouteEntry {
                path: r.path(),
                title: r.title(),
                indexable: r.robots().meta().is_none(),
            })
            .collect(),
        placeholders: PLACEHOLDER_PATHS.to_vec(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}Routes{}", p.bold, p.reset);
    for entry in &listing.routes {
        let flag = if entry.indexable { "" } else { " (noindex)" };
        println!(
            "  {}{:<14}{} {}{}{}{}",
            p.green, entry.path, p.reset, entry.title, p.dim, flag, p.reset
        );
    }
    println!();
    println!("{}Placeholders{} {}(linked, answer 404){}", p.bold, p.reset, p.dim, p.reset);
    for path in &listing.placeholders {
        println!("  {}{path}{}", p.yellow, p.reset);
    }
    Ok(ExitCode::SUCCESS)
}

// ── links ────────────────────────────────────────────────────────────

fn cmd_links(form_endpoint: &str, json: bool, p: &Palette) -> Result<ExitCode> {
    let reports = audit_site(&RenderContext::now(form_endpoint));
    let broken = reports.iter().filter(|r| !r.target.is_resolved()).count();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            let (color, label) = match &report.target {
                LinkTarget::Page { .. } => (p.green, "page"),
                LinkTarget::Asset { .. } => (p.green, "asset"),
                LinkTarget::Placeholder { .. } => (p.yellow, "placeholder"),
                LinkTarget::External { .. } => (p.dim, "external"),
                LinkTarget::Inert => (p.dim, "inert"),
                LinkTarget::Unresolved { .. } => (p.red, "UNRESOLVED"),
            };
            println!(
                "  {:<14} {color}{label:<12}{} {}",
                report.page.path(),
                p.reset,
                report.href
            );
            if let LinkTarget::Unresolved { reason, .. } = &report.target {
                println!("  {:<14} {}{reason}{}", "", p.dim, p.reset);
            }
        }
        println!();
        if broken == 0 {
            println!("{}✓{} {} links checked, all resolve", p.green, p.reset, reports.len());
        } else {
            println!("{}✗{} {broken} of {} links unresolved", p.red, p.reset, reports.len());
        }
    }

    Ok(if broken == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

// ── export ───────────────────────────────────────────────────────────

fn cmd_export(
    dir: &Path,
    site_url: &str,
    year: Option<i32>,
    form_endpoint: &str,
    json: bool,
    p: &Palette,
) -> Result<ExitCode> {
    let site_url = site_url.trim().trim_end_matches('/');
    let form_endpoint = form_endpoint.trim();
    if !is_absolute_http_url(site_url) {
        bail!("--site-url must be an absolute http(s) URL, got '{site_url}'");
    }
    if !is_absolute_http_url(form_endpoint) {
        bail!("--form-endpoint must be an absolute http(s) URL, got '{form_endpoint}'");
    }

    let ctx = match year {
        Some(year) => RenderContext::with_year(year, form_endpoint),
        None => RenderContext::now(form_endpoint),
    };

    let manifest = export_site(dir, &ctx, site_url)
        .with_context(|| format!("failed to export site to {}", dir.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&manifest)?);
    } else {
        for file in &manifest.files {
            println!("  {}{:<24}{} {:>7} B  {}", p.dim, file.url, p.reset, file.bytes, file.file);
        }
        println!();
        println!(
            "{}✓{} exported {} files to {}",
            p.green,
            p.reset,
            manifest.files.len(),
            dir.display()
        );
    }
    Ok(ExitCode::SUCCESS)
}
