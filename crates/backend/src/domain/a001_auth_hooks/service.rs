use chrono::Utc;
use contracts::domain::a001_auth_hooks::aggregate::{
    AuthConfigPatch, AuthConfigUpdated, AuthHooksConfig,
};

use super::repository;
use crate::shared::error::ApiError;
use crate::system::access;

/// Текущая конфигурация хуков проекта
pub async fn get_config(project_ref: &str) -> Result<AuthHooksConfig, ApiError> {
    repository::get_store()?
        .get(project_ref)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Project {} not found", project_ref)))
}

/// Обновление конфигурации хуков с проверкой прав и тарифа
pub async fn update_config(
    project_ref: &str,
    patch: AuthConfigPatch,
) -> Result<AuthConfigUpdated, ApiError> {
    if patch.is_empty() {
        return Err(ApiError::BadRequest("Patch is empty".to_string()));
    }

    access::get_registry()?.check_patch(project_ref, &patch)?;

    let config = repository::get_store()?
        .apply_patch(project_ref, &patch)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Project {} not found", project_ref)))?;

    tracing::info!(
        "Auth hooks updated for project {}: {:?}",
        project_ref,
        patch.touched_kinds()
    );

    Ok(AuthConfigUpdated {
        config,
        updated_at: Utc::now(),
    })
}
