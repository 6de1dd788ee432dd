//! Server configuration for the FINAURA site.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `FINAURA_*` environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use finaura_core::links::is_absolute_http_url;
pub use finaura_core::{DEFAULT_FORM_ENDPOINT, DEFAULT_SITE_URL};

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
    3000,
);

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// URL the mailing-list form posts to.
    pub form_endpoint: String,
    /// Public origin of the site, without trailing slash.
    pub site_url: String,
    /// Directory served under `/static` (optional).
    pub public_dir: Option<PathBuf>,
    /// Maximum number of requests handled at once.
    pub max_concurrent_requests: usize,
}

/// Invalid configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A URL setting is not an absolute `http(s)` URL.
    #[error("{var} must be an absolute http(s) URL, got '{value}'")]
    InvalidUrl { var: &'static str, value: String },

    /// The public directory does not exist or is not a directory.
    #[error("FINAURA_PUBLIC_DIR '{}' is not a directory", path.display())]
    PublicDirMissing { path: PathBuf },

    /// Concurrency limit of zero would reject every request.
    #[error("FINAURA_MAX_CONCURRENCY must be at least 1")]
    ZeroConcurrency,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            log_level: "info".to_owned(),
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_owned(),
            site_url: DEFAULT_SITE_URL.to_owned(),
            public_dir: None,
            max_concurrent_requests: 256,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT` — port to bind on (binds to `0.0.0.0`)
    /// - `FINAURA_BIND_ADDR` — full bind address (overrides `PORT`, default: `127.0.0.1:3000`)
    /// - `FINAURA_LOG_LEVEL` — log filter (default: `info`)
    /// - `FINAURA_FORM_ENDPOINT` — mailing-list form target
    /// - `FINAURA_SITE_URL` — canonical origin (default: `https://finaura.ch`)
    /// - `FINAURA_PUBLIC_DIR` — extra static files served at `/static` (optional)
    /// - `FINAURA_MAX_CONCURRENCY` — concurrent request limit (default: `256`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Priority: FINAURA_BIND_ADDR > PORT > default 127.0.0.1:3000
        let bind_addr = if let Some(addr) = lookup("FINAURA_BIND_ADDR") {
            addr.parse().unwrap_or(DEFAULT_BIND_ADDR)
        } else if let Some(port_str) = lookup("PORT") {
            let port: u16 = port_str.parse().unwrap_or(DEFAULT_BIND_ADDR.port());
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            DEFAULT_BIND_ADDR
        };

        let log_level = lookup("FINAURA_LOG_LEVEL").unwrap_or(defaults.log_level);

        let form_endpoint = lookup("FINAURA_FORM_ENDPOINT")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.form_endpoint);

        let site_url = lookup("FINAURA_SITE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.site_url);

        let public_dir = lookup("FINAURA_PUBLIC_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let max_concurrent_requests = lookup("FINAURA_MAX_CONCURRENCY")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_concurrent_requests);

        Self {
            bind_addr,
            log_level,
            form_endpoint,
            site_url,
            public_dir,
            max_concurrent_requests,
        }
    }

    /// Check values that cannot be corrected by falling back to a default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a malformed URL, a missing public
    /// directory, or a zero concurrency limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("FINAURA_FORM_ENDPOINT", &self.form_endpoint)?;
        check_url("FINAURA_SITE_URL", &self.site_url)?;
        if let Some(dir) = &self.public_dir {
            if !dir.is_dir() {
                return Err(ConfigError::PublicDirMissing { path: dir.clone() });
            }
        }
        if self.max_concurrent_requests == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        Ok(())
    }
}

fn check_url(var: &'static str, value: &str) -> Result<(), ConfigError> {
    if is_absolute_http_url(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl {
            var,
            value: value.to_owned(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> ServerConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ServerConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let cfg = load(&[]);
        assert_eq!(cfg.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(cfg.form_endpoint, DEFAULT_FORM_ENDPOINT);
        assert_eq!(cfg.site_url, DEFAULT_SITE_URL);
        assert!(cfg.public_dir.is_none());
        cfg.validate().unwrap();
    }

    #[test]
    fn bind_addr_beats_port() {
        let cfg = load(&[("FINAURA_BIND_ADDR", "0.0.0.0:9000"), ("PORT", "8080")]);
        assert_eq!(cfg.bind_addr, "0.0.0.0:9000".parse().unwrap());

        let cfg = load(&[("PORT", "8080")]);
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn bad_bind_addr_falls_back() {
        let cfg = load(&[("FINAURA_BIND_ADDR", "nonsense")]);
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn site_url_loses_trailing_slash() {
        let cfg = load(&[("FINAURA_SITE_URL", "https://example.ch/")]);
        assert_eq!(cfg.site_url, "https://example.ch");
    }

    #[test]
    fn validate_rejects_relative_form_endpoint() {
        let cfg = load(&[("FINAURA_FORM_ENDPOINT", "/subscribe")]);
        let err = cfg.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidUrl {
                var: "FINAURA_FORM_ENDPOINT",
                ..
            }
        ));
        assert!(load(&[("FINAURA_FORM_ENDPOINT", "https://")]).validate().is_err());
    }

    #[test]
    fn validate_checks_public_dir_and_concurrency() {
        let dir = tempfile::tempdir().unwrap();
        let ok = load(&[("FINAURA_PUBLIC_DIR", dir.path().to_str().unwrap())]);
        ok.validate().unwrap();

        let missing = load(&[("FINAURA_PUBLIC_DIR", "/definitely/not/here")]);
        assert!(matches!(
            missing.validate(),
            Err(ConfigError::PublicDirMissing { .. })
        ));

        let zero = load(&[("FINAURA_MAX_CONCURRENCY", "0")]);
        assert!(matches!(zero.validate(), Err(ConfigError::ZeroConcurrency)));
    }
}
