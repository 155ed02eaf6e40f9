//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one subdirectory per project
    pub content_root: PathBuf,

    /// URL prefix under which files in `content_root` are published
    pub asset_url_prefix: String,

    /// Static catalog file; when set it replaces the content directory as source
    pub projects_catalog: Option<PathBuf>,

    /// Seconds a computed project list may be reused, 0 disables caching
    pub revalidate_seconds: u64,

    /// Allowed CORS origins, empty means permissive
    pub cors_allowed_origins: Vec<String>,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let revalidate_seconds = match lookup("REVALIDATE_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("REVALIDATE_SECONDS must be an integer, got {raw:?}"))?,
            None => 0,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            None => 3000,
        };

        let config = Self {
            content_root: lookup("CONTENT_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public/projects")),
            asset_url_prefix: normalize_prefix(
                &lookup("ASSET_URL_PREFIX").unwrap_or_else(|| "/projects".to_string()),
            ),
            projects_catalog: lookup("PROJECTS_CATALOG")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            revalidate_seconds,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "portfolio=debug".to_string()),
            port,
        };

        Ok(config)
    }
}

/// Ensure a single leading slash and no trailing slash
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    format!("/{trimmed}")
}
