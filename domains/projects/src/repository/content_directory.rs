//! Filesystem project source
//!
//! The content root holds one directory per project. Recognized media files
//! directly inside a project directory become its assets, ordered naturally
//! by filename and merged with the entries of an optional `videos.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use portfolio_common::Result;
use tracing::{debug, warn};

use crate::domain::entities::{choose_thumbnail, AssetKind, ProjectAsset, ProjectData};
use crate::domain::manifest::VideoManifest;
use crate::domain::ordering::{sort_natural, Position};
use crate::repository::ProjectSource;

/// Project asset resolver over a content root directory
#[derive(Debug, Clone)]
pub struct ContentDirectory {
    root: PathBuf,
    url_prefix: String,
}

impl ContentDirectory {
    /// Create a resolver for `root`, publishing assets under `url_prefix`
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        let url_prefix = url_prefix.into().trim_end_matches('/').to_string();
        Self {
            root: root.into(),
            url_prefix,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// Names of all project directories, sorted.
    ///
    /// A missing content root is created and yields no projects.
    pub fn list_project_slugs(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            debug!(root = %self.root.display(), "Creating missing content root");
            fs::create_dir_all(&self.root)?;
            return Ok(Vec::new());
        }

        let mut slugs = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => slugs.push(name),
                Err(name) => warn!(name = ?name, "Skipping project directory with non UTF-8 name"),
            }
        }

        slugs.sort();
        Ok(slugs)
    }

    /// Directory for `slug`, or `None` if the slug could escape the content root
    fn project_dir(&self, slug: &str) -> Option<PathBuf> {
        if !is_safe_slug(slug) {
            return None;
        }
        Some(self.root.join(slug))
    }

    /// Recognized media filenames in `dir`, in natural order
    fn media_files(dir: &Path) -> Result<Vec<(String, AssetKind)>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if classify(&name).is_some() {
                names.push(name);
            }
        }

        sort_natural(&mut names);

        Ok(names
            .into_iter()
            .filter_map(|name| classify(&name).map(|kind| (name, kind)))
            .collect())
    }

    /// Manifest entries for `dir`; any manifest problem means no entries
    fn manifest_assets(slug: &str, dir: &Path) -> Vec<(Position, ProjectAsset)> {
        match VideoManifest::load(dir) {
            Ok(Some(manifest)) => manifest.into_assets(),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(slug = %slug, error = %e, "Ignoring unusable video manifest");
                Vec::new()
            }
        }
    }

    /// Ordered assets for a project.
    ///
    /// A missing project and a project without media both yield an empty list.
    pub fn list_assets(&self, slug: &str) -> Result<Vec<ProjectAsset>> {
        let Some(dir) = self.project_dir(slug) else {
            debug!(slug = %slug, "Rejected unsafe project slug");
            return Ok(Vec::new());
        };

        let files = match Self::media_files(&dir) {
            Ok(files) => files,
            Err(portfolio_common::Error::Io(e))
                if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) =>
            {
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let mut positioned: Vec<(Position, ProjectAsset)> = files
            .into_iter()
            .enumerate()
            .map(|(index, (name, kind))| {
                let source = format!("{}/{}/{}", self.url_prefix, slug, name);
                (index as Position, ProjectAsset::from_file(kind, source, name))
            })
            .collect();

        positioned.extend(Self::manifest_assets(slug, &dir));

        // Stable: ties keep files ahead of manifest entries
        positioned.sort_by(|(a, _), (b, _)| a.total_cmp(b));

        debug!(slug = %slug, count = positioned.len(), "Resolved project assets");

        Ok(positioned.into_iter().map(|(_, asset)| asset).collect())
    }

    /// Source of the representative asset for a project
    pub fn resolve_thumbnail(&self, slug: &str) -> Result<String> {
        Ok(choose_thumbnail(&self.list_assets(slug)?))
    }

    /// Full project data, or `None` when the project has no assets
    pub fn get_project(&self, slug: &str) -> Result<Option<ProjectData>> {
        let assets = self.list_assets(slug)?;
        Ok(ProjectData::from_assets(slug, assets))
    }

    /// Every project with assets, in slug order
    pub fn get_all_projects(&self) -> Result<Vec<ProjectData>> {
        let mut projects = Vec::new();
        for slug in self.list_project_slugs()? {
            if let Some(project) = self.get_project(&slug)? {
                projects.push(project);
            }
        }
        Ok(projects)
    }
}

impl ProjectSource for ContentDirectory {
    #[mutants::skip] // Delegates to get_all_projects()
    fn all_projects(&self) -> Result<Vec<ProjectData>> {
        self.get_all_projects()
    }

    #[mutants::skip] // Delegates to get_project()
    fn project(&self, slug: &str) -> Result<Option<ProjectData>> {
        self.get_project(slug)
    }
}

/// Asset kind for a filename, by extension
fn classify(name: &str) -> Option<AssetKind> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(AssetKind::from_extension)
}

/// A slug must name a single directory entry below the content root
fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\', '\0'])
}
