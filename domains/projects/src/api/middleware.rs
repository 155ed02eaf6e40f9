//! Projects domain state

use std::sync::Arc;

use crate::repository::{ProjectSource, SharedSource};

/// Application state for the Projects domain
#[derive(Clone)]
pub struct ProjectsState {
    pub source: SharedSource,
}

impl ProjectsState {
    pub fn new<S: ProjectSource + 'static>(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}
