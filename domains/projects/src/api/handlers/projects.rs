//! Project API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use portfolio_common::{Error, Result};
use tracing::debug;

use crate::api::middleware::ProjectsState;
use crate::domain::entities::ProjectData;
use crate::repository::ProjectSource;

/// Run a source call on the blocking pool; sources touch the filesystem
async fn with_source<T, F>(state: &ProjectsState, f: F) -> Result<T>
where
    F: FnOnce(&dyn ProjectSource) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let source = state.source.clone();
    tokio::task::spawn_blocking(move || f(source.as_ref()))
        .await
        .map_err(|e| Error::Internal(format!("project lookup task failed: {e}")))?
}

/// List all projects
pub async fn list_projects(State(state): State<ProjectsState>) -> Result<Json<Vec<ProjectData>>> {
    let projects = with_source(&state, |source| source.all_projects()).await?;
    debug!(count = projects.len(), "Listed projects");
    Ok(Json(projects))
}

/// Get a single project by slug
pub async fn get_project(
    State(state): State<ProjectsState>,
    Path(slug): Path<String>,
) -> Result<Json<ProjectData>> {
    if slug.trim().is_empty() {
        return Err(Error::Validation("Project slug is required".to_string()));
    }

    let lookup = slug.clone();
    let project = with_source(&state, move |source| source.project(&lookup))
        .await?
        .ok_or_else(|| Error::NotFound("Project not found".to_string()))?;

    debug!(slug = %slug, assets = project.assets.len(), "Fetched project");
    Ok(Json(project))
}

/// Requests for `/api/projects/` carry an empty slug
pub async fn missing_slug() -> Error {
    Error::Validation("Project slug is required".to_string())
}
