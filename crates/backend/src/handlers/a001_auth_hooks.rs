use axum::{extract::Path, Json};
use contracts::domain::a001_auth_hooks::aggregate::{
    AuthConfigPatch, AuthConfigUpdated, AuthHooksConfig,
};

use crate::domain::a001_auth_hooks;
use crate::shared::error::ApiError;

/// GET /api/projects/:ref/config/auth
pub async fn get_config(
    Path(project_ref): Path<String>,
) -> Result<Json<AuthHooksConfig>, ApiError> {
    a001_auth_hooks::service::get_config(&project_ref)
        .await
        .map(Json)
}

/// PATCH /api/projects/:ref/config/auth
pub async fn update_config(
    Path(project_ref): Path<String>,
    Json(patch): Json<AuthConfigPatch>,
) -> Result<Json<AuthConfigUpdated>, ApiError> {
    a001_auth_hooks::service::update_config(&project_ref, patch)
        .await
        .map(Json)
}
