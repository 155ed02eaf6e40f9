//! External video manifest (`videos.json`)
//!
//! A project directory may carry a manifest listing externally hosted videos:
//!
//! ```json
//! { "videos": [ { "url": "https://youtu.be/abc", "position": 2, "caption": "Reel" } ] }
//! ```
//!
//! YouTube and Vimeo links are rewritten to their embeddable player URLs;
//! anything else is kept verbatim as a generic external embed.

use std::fs;
use std::io;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::entities::{AssetKind, ProjectAsset};
use crate::domain::ordering::{Position, UNPOSITIONED};

/// Manifest filename looked up inside each project directory
pub const MANIFEST_FILENAME: &str = "videos.json";

lazy_static! {
    /// YouTube watch, short and embed links
    static ref YOUTUBE_PATTERNS: [Regex; 2] = [
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)").unwrap(),
        Regex::new(r"youtube\.com/watch\?.*v=([^&\n?#]+)").unwrap(),
    ];

    /// Vimeo page and embed links with a numeric video id
    static ref VIMEO_PATTERNS: [Regex; 2] = [
        Regex::new(r"vimeo\.com/(\d+)").unwrap(),
        Regex::new(r"vimeo\.com/embed/(\d+)").unwrap(),
    ];
}

/// Reasons a manifest could not be used
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest: {0}")]
    Read(#[from] io::Error),

    #[error("invalid manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("manifest has no `videos` array")]
    MissingVideos,
}

/// Parsed `videos.json` document.
///
/// Entries stay untyped until conversion so one malformed entry cannot
/// invalidate its siblings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoManifest {
    #[serde(default)]
    pub videos: Option<Vec<Value>>,
}

/// One externally hosted video
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManifestEntry {
    pub url: Option<String>,
    pub position: Option<f64>,
    pub caption: Option<String>,
}

impl ManifestEntry {
    /// Read an entry field by field; mistyped fields become `None`.
    ///
    /// Returns `None` when the entry is not a JSON object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        Some(Self {
            url: fields.get("url").and_then(Value::as_str).map(String::from),
            position: fields.get("position").and_then(position_from_value),
            caption: fields.get("caption").and_then(Value::as_str).map(String::from),
        })
    }
}

/// Numbers and numeric strings are both accepted as positions
fn position_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|p| p.is_finite()),
        _ => None,
    }
}

impl VideoManifest {
    /// Parse a manifest document
    pub fn parse(raw: &str) -> Result<Self, ManifestError> {
        let manifest: VideoManifest = serde_json::from_str(raw)?;
        if manifest.videos.is_none() {
            return Err(ManifestError::MissingVideos);
        }
        Ok(manifest)
    }

    /// Read the manifest in `project_dir`.
    ///
    /// A missing file is `Ok(None)`; an unreadable or malformed one is an error.
    pub fn load(project_dir: &Path) -> Result<Option<Self>, ManifestError> {
        let path = project_dir.join(MANIFEST_FILENAME);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Self::parse(&raw).map(Some)
    }

    /// Convert entries into positioned embed assets, in manifest order
    pub fn into_assets(self) -> Vec<(Position, ProjectAsset)> {
        self.videos
            .unwrap_or_default()
            .iter()
            .filter_map(|value| {
                let Some(entry) = ManifestEntry::from_value(value) else {
                    tracing::warn!(entry = %value, "Skipping manifest entry that is not an object");
                    return None;
                };
                let url = match entry.url.as_deref().map(str::trim) {
                    Some(url) if !url.is_empty() => url.to_string(),
                    _ => {
                        tracing::warn!(caption = ?entry.caption, "Skipping manifest entry without url");
                        return None;
                    }
                };
                let (kind, source) = resolve_embed(&url);
                let position = entry.position.unwrap_or(UNPOSITIONED);
                Some((position, ProjectAsset::embed(kind, source, entry.caption)))
            })
            .collect()
    }
}

fn first_capture(patterns: &[Regex], url: &str) -> Option<String> {
    patterns
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
}

/// Embeddable YouTube URL for any recognized YouTube link
pub fn youtube_embed_url(url: &str) -> Option<String> {
    first_capture(YOUTUBE_PATTERNS.as_slice(), url)
        .map(|id| format!("https://www.youtube.com/embed/{id}"))
}

/// Embeddable Vimeo player URL for any recognized Vimeo link
pub fn vimeo_embed_url(url: &str) -> Option<String> {
    first_capture(VIMEO_PATTERNS.as_slice(), url)
        .map(|id| format!("https://player.vimeo.com/video/{id}"))
}

/// Classify an external video URL and rewrite it to its embeddable form
pub fn resolve_embed(url: &str) -> (AssetKind, String) {
    if let Some(embed) = youtube_embed_url(url) {
        (AssetKind::YoutubeEmbed, embed)
    } else if let Some(embed) = vimeo_embed_url(url) {
        (AssetKind::VimeoEmbed, embed)
    } else {
        (AssetKind::ExternalEmbed, url.to_string())
    }
}
