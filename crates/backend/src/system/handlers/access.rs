use axum::{extract::Path, Json};
use contracts::system::access::{ProjectPermissions, Subscription};
use contracts::system::projects::ProjectInfo;

use crate::shared::error::ApiError;
use crate::system::access;

/// GET /api/projects/current
pub async fn current_project() -> Result<Json<ProjectInfo>, ApiError> {
    Ok(Json(access::get_registry()?.current_project().clone()))
}

/// GET /api/projects/:ref
pub async fn project(Path(project_ref): Path<String>) -> Result<Json<ProjectInfo>, ApiError> {
    access::get_registry()?.project(&project_ref).map(Json)
}

/// GET /api/projects/:ref/permissions
pub async fn permissions(
    Path(project_ref): Path<String>,
) -> Result<Json<ProjectPermissions>, ApiError> {
    access::get_registry()?.permissions(&project_ref).map(Json)
}

/// GET /api/organizations/:slug/subscription
pub async fn subscription(Path(slug): Path<String>) -> Result<Json<Subscription>, ApiError> {
    access::get_registry()?.subscription(&slug).map(Json)
}
