//! Route definitions for Projects domain API

use axum::{routing::get, Router};

use super::handlers::projects;
use super::middleware::ProjectsState;

/// Create all Projects domain API routes
pub fn routes() -> Router<ProjectsState> {
    Router::new()
        .route("/api/projects", get(projects::list_projects))
        // Trailing slash gives an empty slug, answered with 400
        .route("/api/projects/", get(projects::missing_slug))
        .route("/api/projects/{slug}", get(projects::get_project))
}
