//! Project sources for the Projects domain
//!
//! A source answers two questions: which projects exist, and what one project
//! looks like. The content directory is the canonical source; a static catalog
//! and a time-bounded cache can stand in front of or instead of it.

pub mod cache;
pub mod content_directory;
pub mod static_catalog;

use std::sync::Arc;

use portfolio_common::Result;

use crate::domain::entities::ProjectData;

pub use cache::CachedSource;
pub use content_directory::ContentDirectory;
pub use static_catalog::StaticCatalog;

/// Read-only access to portfolio projects.
///
/// Implementations are synchronous; callers on an async runtime should run
/// them on a blocking thread.
pub trait ProjectSource: Send + Sync {
    /// All projects that have at least one asset.
    ///
    /// Each source defines its own order: the content directory lists by
    /// slug, a static catalog keeps the order of its file.
    fn all_projects(&self) -> Result<Vec<ProjectData>>;

    /// A single project, or `None` if it does not exist or has no assets
    fn project(&self, slug: &str) -> Result<Option<ProjectData>>;
}

/// Shared handle to any project source
pub type SharedSource = Arc<dyn ProjectSource>;
