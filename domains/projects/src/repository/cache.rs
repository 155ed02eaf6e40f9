//! Revalidate-after-N-seconds cache over a project source
//!
//! The full project list is computed once and reused until it is older than
//! the configured TTL. Single-project lookups are answered from the same
//! snapshot, so both endpoints see the same state of the content root.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use portfolio_common::Result;
use tracing::debug;

use crate::domain::entities::ProjectData;
use crate::repository::ProjectSource;

struct Snapshot {
    taken_at: Instant,
    projects: Arc<Vec<ProjectData>>,
}

pub struct CachedSource<S> {
    inner: S,
    ttl: Duration,
    snapshot: Mutex<Option<Snapshot>>,
}

impl<S: ProjectSource> CachedSource<S> {
    /// Wrap `inner`; a zero `ttl` passes every call straight through
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            snapshot: Mutex::new(None),
        }
    }

    fn projects(&self) -> Result<Arc<Vec<ProjectData>>> {
        // Held across the recompute so concurrent misses scan only once
        let mut guard = self.snapshot.lock();

        if let Some(snapshot) = guard.as_ref() {
            if snapshot.taken_at.elapsed() < self.ttl {
                return Ok(Arc::clone(&snapshot.projects));
            }
        }

        debug!(ttl_secs = self.ttl.as_secs(), "Revalidating project snapshot");
        let projects = Arc::new(self.inner.all_projects()?);
        *guard = Some(Snapshot {
            taken_at: Instant::now(),
            projects: Arc::clone(&projects),
        });
        Ok(projects)
    }
}

impl<S: ProjectSource> ProjectSource for CachedSource<S> {
    fn all_projects(&self) -> Result<Vec<ProjectData>> {
        if self.ttl.is_zero() {
            return self.inner.all_projects();
        }
        Ok(self.projects()?.as_ref().clone())
    }

    fn project(&self, slug: &str) -> Result<Option<ProjectData>> {
        if self.ttl.is_zero() {
            return self.inner.project(slug);
        }
        Ok(self.projects()?.iter().find(|p| p.slug == slug).cloned())
    }
}
