use std::collections::HashMap;

use crate::domain::{a001_auth_hooks, a002_pg_catalog};
use crate::shared::config::Config;
use crate::system::access;

/// Заполнение хранилищ в памяти из конфигурации
pub fn initialize_state(config: &Config) -> anyhow::Result<()> {
    let store = a001_auth_hooks::repository::AuthConfigStore::new(
        config
            .projects
            .iter()
            .map(|p| (p.project_ref.clone(), p.auth_hooks.clone())),
    );
    a001_auth_hooks::repository::initialize(store)?;

    let catalogs: HashMap<String, a002_pg_catalog::repository::PgCatalog> = config
        .projects
        .iter()
        .map(|p| {
            (
                p.project_ref.clone(),
                a002_pg_catalog::repository::PgCatalog::from_project(p),
            )
        })
        .collect();
    a002_pg_catalog::repository::initialize(catalogs)?;

    access::initialize(access::AccessRegistry::from_projects(&config.projects)?)?;

    for project in &config.projects {
        tracing::info!(
            "Project {} (org {}, plan {:?}, can update auth config: {}, functions: {})",
            project.project_ref,
            project.organization_slug,
            project.plan,
            project.can_update_auth_config,
            project.functions.len()
        );
    }

    Ok(())
}
