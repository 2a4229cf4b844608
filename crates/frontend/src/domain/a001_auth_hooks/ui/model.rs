use contracts::domain::a001_auth_hooks::aggregate::{
    AuthConfigPatch, AuthConfigUpdated, AuthHooksConfig,
};
use contracts::system::access::{ProjectPermissions, Subscription};

use crate::shared::api_utils::{get_json, patch_json, path_segment};

pub fn auth_config_path(project_ref: &str) -> String {
    format!("/api/projects/{}/config/auth", path_segment(project_ref))
}

pub async fn fetch_auth_config(project_ref: &str) -> Result<AuthHooksConfig, String> {
    get_json(&auth_config_path(project_ref)).await
}

pub async fn update_auth_config(
    project_ref: &str,
    patch: &AuthConfigPatch,
) -> Result<AuthConfigUpdated, String> {
    patch_json(&auth_config_path(project_ref), patch).await
}

pub async fn fetch_permissions(project_ref: &str) -> Result<ProjectPermissions, String> {
    get_json(&format!(
        "/api/projects/{}/permissions",
        path_segment(project_ref)
    ))
    .await
}

pub async fn fetch_subscription(organization_slug: &str) -> Result<Subscription, String> {
    get_json(&format!(
        "/api/organizations/{}/subscription",
        path_segment(organization_slug)
    ))
    .await
}
