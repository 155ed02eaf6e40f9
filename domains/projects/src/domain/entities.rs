//! Domain entities for the Projects domain
//!
//! Projects and their assets are derived, read-only views over the content
//! source. Nothing here is persisted; every value is recomputed from disk or
//! from a static catalog.

use serde::{Deserialize, Serialize};

/// Recognized still-image extensions (lowercase, without the dot)
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "svg", "gif"];

/// Recognized video container extensions (lowercase, without the dot)
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov"];

/// Thumbnail used when a project has no image asset
pub const PLACEHOLDER_THUMBNAIL: &str = "/placeholder.png";

/// Filenames that take priority as a project thumbnail, compared case-insensitively
pub const THUMBNAIL_CANDIDATES: &[&str] = &["cover.png", "1.png", "thumbnail.png"];

/// Kind of a displayable asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "youtube")]
    YoutubeEmbed,
    #[serde(rename = "vimeo")]
    VimeoEmbed,
    #[serde(rename = "external")]
    ExternalEmbed,
}

impl AssetKind {
    /// Classify a file by its extension.
    ///
    /// Returns `None` for unrecognized extensions. Animated images such as
    /// `gif` are always `Image` so they render inline rather than in a player.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_ascii_lowercase();
        if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            Some(AssetKind::Video)
        } else if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            Some(AssetKind::Image)
        } else {
            None
        }
    }

    /// Check if this asset is hosted outside the content directory
    pub fn is_embed(&self) -> bool {
        matches!(
            self,
            AssetKind::YoutubeEmbed | AssetKind::VimeoEmbed | AssetKind::ExternalEmbed
        )
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
            Self::YoutubeEmbed => write!(f, "youtube"),
            Self::VimeoEmbed => write!(f, "vimeo"),
            Self::ExternalEmbed => write!(f, "external"),
        }
    }
}

/// One displayable unit of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectAsset {
    #[serde(rename = "type")]
    pub kind: AssetKind,
    #[serde(rename = "src")]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ProjectAsset {
    /// Asset discovered in a project directory
    pub fn from_file(kind: AssetKind, source: String, filename: String) -> Self {
        Self {
            kind,
            source,
            filename: Some(filename),
            caption: None,
        }
    }

    /// Asset declared in a project's video manifest
    pub fn embed(kind: AssetKind, source: String, caption: Option<String>) -> Self {
        Self {
            kind,
            source,
            filename: None,
            caption,
        }
    }

    /// Whether this is a local file named like a preferred thumbnail
    pub fn is_thumbnail_candidate(&self) -> bool {
        if self.kind.is_embed() {
            return false;
        }
        self.filename.as_deref().is_some_and(|name| {
            THUMBNAIL_CANDIDATES
                .iter()
                .any(|candidate| name.eq_ignore_ascii_case(candidate))
        })
    }
}

/// One portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectData {
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub thumbnail: String,
    pub assets: Vec<ProjectAsset>,
}

impl ProjectData {
    /// Build a project from its resolved assets.
    ///
    /// Returns `None` when there are no assets: an empty project does not exist.
    pub fn from_assets(slug: &str, assets: Vec<ProjectAsset>) -> Option<Self> {
        if assets.is_empty() {
            return None;
        }

        Some(Self {
            slug: slug.to_string(),
            title: crate::domain::title::format_title(slug),
            description: None,
            thumbnail: choose_thumbnail(&assets),
            assets,
        })
    }
}

/// Pick the representative asset source for a project.
///
/// Priority: a preferred filename, then the first image, then the placeholder.
pub fn choose_thumbnail(assets: &[ProjectAsset]) -> String {
    assets
        .iter()
        .find(|asset| asset.is_thumbnail_candidate())
        .or_else(|| assets.iter().find(|asset| asset.kind == AssetKind::Image))
        .map(|asset| asset.source.clone())
        .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string())
}
