//! Static project catalog
//!
//! A fixed list of projects loaded once from a JSON file, for deployments that
//! ship project data alongside the binary instead of scanning a directory.

use std::fs;
use std::path::Path;

use portfolio_common::{Error, Result};
use tracing::{info, warn};

use crate::domain::entities::ProjectData;
use crate::repository::ProjectSource;

#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    projects: Vec<ProjectData>,
}

impl StaticCatalog {
    /// Build a catalog, dropping projects without assets.
    ///
    /// The remaining projects keep the order they were given in.
    pub fn new(projects: Vec<ProjectData>) -> Self {
        let projects: Vec<ProjectData> = projects
            .into_iter()
            .filter(|project| {
                if project.assets.is_empty() {
                    warn!(slug = %project.slug, "Dropping catalog project without assets");
                    false
                } else {
                    true
                }
            })
            .collect();
        Self { projects }
    }

    /// Parse a catalog from a JSON array of projects
    pub fn from_json(raw: &str) -> Result<Self> {
        let projects: Vec<ProjectData> = serde_json::from_str(raw)?;
        Ok(Self::new(projects))
    }

    /// Load a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            Error::Internal(format!(
                "failed to read project catalog {}: {}",
                path.display(),
                e
            ))
        })?;
        let catalog = Self::from_json(&raw)?;
        if catalog.is_empty() {
            warn!(path = %path.display(), "Project catalog has no projects with assets");
        } else {
            info!(path = %path.display(), count = catalog.len(), "Loaded project catalog");
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl ProjectSource for StaticCatalog {
    fn all_projects(&self) -> Result<Vec<ProjectData>> {
        Ok(self.projects.clone())
    }

    fn project(&self, slug: &str) -> Result<Option<ProjectData>> {
        Ok(self.projects.iter().find(|p| p.slug == slug).cloned())
    }
}
