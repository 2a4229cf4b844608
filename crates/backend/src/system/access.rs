//! Права и тарифы проектов dev API

use std::collections::HashMap;

use contracts::domain::a001_auth_hooks::aggregate::AuthConfigPatch;
use contracts::system::access::{ProjectPermissions, Subscription, AUTH_CONFIG_RESOURCE};
use contracts::system::projects::ProjectInfo;
use once_cell::sync::OnceCell;

use crate::shared::config::ProjectConfig;
use crate::shared::error::ApiError;

#[derive(Debug, Clone)]
struct ProjectAccess {
    info: ProjectInfo,
    permissions: ProjectPermissions,
}

/// Реестр проектов: права пользователя и подписки организаций
#[derive(Debug, Clone)]
pub struct AccessRegistry {
    current: ProjectInfo,
    projects: HashMap<String, ProjectAccess>,
    subscriptions: HashMap<String, Subscription>,
}

impl AccessRegistry {
    /// Первый проект из конфигурации считается выбранным
    pub fn from_projects(projects: &[ProjectConfig]) -> anyhow::Result<Self> {
        let first = projects
            .first()
            .ok_or_else(|| anyhow::anyhow!("no projects configured"))?;

        let mut registry = Self {
            current: ProjectInfo {
                project_ref: first.project_ref.clone(),
                organization_slug: first.organization_slug.clone(),
            },
            projects: HashMap::new(),
            subscriptions: HashMap::new(),
        };

        for project in projects {
            let info = ProjectInfo {
                project_ref: project.project_ref.clone(),
                organization_slug: project.organization_slug.clone(),
            };
            registry.projects.insert(
                project.project_ref.clone(),
                ProjectAccess {
                    info,
                    permissions: ProjectPermissions {
                        can_update_auth_config: project.can_update_auth_config,
                    },
                },
            );

            if let Some(existing) = registry.subscriptions.get(&project.organization_slug) {
                if existing.plan.id != project.plan {
                    tracing::warn!(
                        "Organization {} has conflicting plans, keeping {:?}",
                        project.organization_slug,
                        existing.plan.id
                    );
                }
                continue;
            }
            registry.subscriptions.insert(
                project.organization_slug.clone(),
                Subscription::new(project.plan),
            );
        }

        Ok(registry)
    }

    pub fn current_project(&self) -> &ProjectInfo {
        &self.current
    }

    pub fn project(&self, project_ref: &str) -> Result<ProjectInfo, ApiError> {
        self.projects
            .get(project_ref)
            .map(|p| p.info.clone())
            .ok_or_else(|| ApiError::NotFound(format!("Project {} not found", project_ref)))
    }

    pub fn permissions(&self, project_ref: &str) -> Result<ProjectPermissions, ApiError> {
        self.projects
            .get(project_ref)
            .map(|p| p.permissions)
            .ok_or_else(|| ApiError::NotFound(format!("Project {} not found", project_ref)))
    }

    pub fn subscription(&self, organization_slug: &str) -> Result<Subscription, ApiError> {
        self.subscriptions
            .get(organization_slug)
            .cloned()
            .ok_or_else(|| {
                ApiError::NotFound(format!("Organization {} not found", organization_slug))
            })
    }

    /// Право UPDATE на конфигурацию и тариф для расширенных хуков
    pub fn check_patch(&self, project_ref: &str, patch: &AuthConfigPatch) -> Result<(), ApiError> {
        let project = self
            .projects
            .get(project_ref)
            .ok_or_else(|| ApiError::NotFound(format!("Project {} not found", project_ref)))?;

        if !project.permissions.can_update_auth_config {
            return Err(ApiError::Forbidden(format!(
                "Missing UPDATE permission on {}",
                AUTH_CONFIG_RESOURCE
            )));
        }

        if patch.touches_gated_hooks() {
            let subscription = self.subscription(&project.info.organization_slug)?;
            if !subscription.plan.id.qualifies_for_enterprise_hooks() {
                return Err(ApiError::Forbidden(format!(
                    "Enterprise hooks are not available on the {} plan",
                    subscription.plan.name
                )));
            }
        }

        Ok(())
    }
}

static REGISTRY: OnceCell<AccessRegistry> = OnceCell::new();

pub fn initialize(registry: AccessRegistry) -> anyhow::Result<()> {
    REGISTRY
        .set(registry)
        .map_err(|_| anyhow::anyhow!("access registry already initialized"))
}

pub fn get_registry() -> anyhow::Result<&'static AccessRegistry> {
    REGISTRY
        .get()
        .ok_or_else(|| anyhow::anyhow!("access registry is not initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;
    use contracts::domain::a001_auth_hooks::aggregate::{
        BasicHooksForm, EnterpriseHooksForm, HooksForm,
    };
    use contracts::system::access::PlanId;

    fn registry() -> AccessRegistry {
        let config = parse_config(
            r#"
            [[projects]]
            ref = "team-project"
            organization_slug = "team-org"
            plan = "team"
            can_update_auth_config = true

            [[projects]]
            ref = "pro-project"
            organization_slug = "pro-org"
            plan = "pro"
            can_update_auth_config = true

            [[projects]]
            ref = "readonly"
            organization_slug = "team-org"
            plan = "team"
            "#,
        )
        .unwrap();
        AccessRegistry::from_projects(&config.projects).unwrap()
    }

    #[test]
    fn test_current_project_is_first() {
        let registry = registry();
        assert_eq!(registry.current_project().project_ref, "team-project");
        assert_eq!(registry.current_project().organization_slug, "team-org");
    }

    #[test]
    fn test_project_lookup() {
        let registry = registry();
        assert_eq!(
            registry.project("readonly").unwrap().organization_slug,
            "team-org"
        );
        assert!(matches!(
            registry.project("missing"),
            Err(ApiError::NotFound(_))
        ));
    }

    #[test]
    fn test_subscription_lookup() {
        let registry = registry();
        assert_eq!(registry.subscription("pro-org").unwrap().plan.id, PlanId::Pro);
        assert!(matches!(
            registry.subscription("nobody"),
            Err(ApiError::NotFound(_))
        ));
    }

    #[test]
    fn test_patch_requires_permission() {
        let registry = registry();
        let patch = BasicHooksForm::default().to_patch();
        assert!(registry.check_patch("team-project", &patch).is_ok());
        assert!(matches!(
            registry.check_patch("readonly", &patch),
            Err(ApiError::Forbidden(_))
        ));
        assert!(matches!(
            registry.check_patch("missing", &patch),
            Err(ApiError::NotFound(_))
        ));
    }

    #[test]
    fn test_gated_hooks_require_plan() {
        let registry = registry();
        let patch = EnterpriseHooksForm::default().to_patch();
        assert!(registry.check_patch("team-project", &patch).is_ok());
        assert!(matches!(
            registry.check_patch("pro-project", &patch),
            Err(ApiError::Forbidden(_))
        ));

        // базовый хук на Pro доступен
        let basic = BasicHooksForm::default().to_patch();
        assert!(registry.check_patch("pro-project", &basic).is_ok());
    }
}
