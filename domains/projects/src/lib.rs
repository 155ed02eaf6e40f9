//! Projects domain: asset discovery, ordering, and the read-only projects API

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{
    choose_thumbnail, AssetKind, ProjectAsset, ProjectData, PLACEHOLDER_THUMBNAIL,
};
pub use domain::manifest::{resolve_embed, ManifestEntry, ManifestError, VideoManifest};
pub use domain::ordering::{natural_cmp, sort_natural, UNPOSITIONED};
pub use domain::title::format_title;

// Re-export repository types
pub use repository::{CachedSource, ContentDirectory, ProjectSource, SharedSource, StaticCatalog};

// Re-export API types
pub use api::routes;
pub use api::ProjectsState;
