//! Portfolio API application composition root
//!
//! Picks the project source from configuration and composes the domain
//! router with the infrastructure routes.

use std::time::Duration;

use axum::{http::HeaderValue, http::Method, Router};
use portfolio_common::Config;
use portfolio_projects::{CachedSource, ContentDirectory, ProjectsState, StaticCatalog};
use tower_http::{cors::AllowOrigin, cors::CorsLayer, services::ServeDir};
use tracing::{info, warn};

/// Create the main application router with all routes
pub fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    let ttl = Duration::from_secs(config.revalidate_seconds);

    let (state, content) = match &config.projects_catalog {
        Some(path) => {
            let catalog = StaticCatalog::load(path)?;
            (ProjectsState::new(catalog), None)
        }
        None => {
            let content = ContentDirectory::new(&config.content_root, &config.asset_url_prefix);
            info!(
                root = %content.root().display(),
                revalidate_secs = config.revalidate_seconds,
                "Serving projects from content directory"
            );
            (
                ProjectsState::new(CachedSource::new(content.clone(), ttl)),
                Some(content),
            )
        }
    };

    let mut app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "Portfolio API v0.1.0" }),
        )
        .merge(portfolio_projects::routes().with_state(state));

    // Media files are published under the same prefix their `src` uses
    if let Some(content) = content {
        let files = ServeDir::new(content.root());
        app = if content.url_prefix().is_empty() {
            app.fallback_service(files)
        } else {
            app.nest_service(content.url_prefix(), files)
        };
    }

    Ok(app)
}

/// CORS for the read-only API.
///
/// No configured origins means any origin may read.
pub fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::HEAD])
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
