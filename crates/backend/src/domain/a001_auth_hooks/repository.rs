use std::collections::HashMap;

use contracts::domain::a001_auth_hooks::aggregate::{AuthConfigPatch, AuthHooksConfig};
use once_cell::sync::OnceCell;
use tokio::sync::RwLock;

/// Конфигурация хуков по проектам, в памяти процесса
pub struct AuthConfigStore {
    configs: RwLock<HashMap<String, AuthHooksConfig>>,
}

impl AuthConfigStore {
    pub fn new(seed: impl IntoIterator<Item = (String, AuthHooksConfig)>) -> Self {
        Self {
            configs: RwLock::new(seed.into_iter().collect()),
        }
    }

    pub async fn get(&self, project_ref: &str) -> Option<AuthHooksConfig> {
        self.configs.read().await.get(project_ref).cloned()
    }

    /// Применить патч; `None`, если проект неизвестен
    pub async fn apply_patch(
        &self,
        project_ref: &str,
        patch: &AuthConfigPatch,
    ) -> Option<AuthHooksConfig> {
        let mut configs = self.configs.write().await;
        let config = configs.get_mut(project_ref)?;
        patch.apply_to(config);
        Some(config.clone())
    }
}

static STORE: OnceCell<AuthConfigStore> = OnceCell::new();

pub fn initialize(store: AuthConfigStore) -> anyhow::Result<()> {
    STORE
        .set(store)
        .map_err(|_| anyhow::anyhow!("auth config store already initialized"))
}

pub fn get_store() -> anyhow::Result<&'static AuthConfigStore> {
    STORE
        .get()
        .ok_or_else(|| anyhow::anyhow!("auth config store is not initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_auth_hooks::aggregate::{HookConfigEntry, HookKind};

    fn store_with_default_project() -> AuthConfigStore {
        let mut config = AuthHooksConfig::default();
        config.set_entry(
            HookKind::CustomizeAccessToken,
            HookConfigEntry::new("pg-functions://postgres/public/claims", true),
        );
        AuthConfigStore::new([("default".to_string(), config)])
    }

    #[tokio::test]
    async fn test_get_unknown_project() {
        let store = store_with_default_project();
        assert!(store.get("missing").await.is_none());
        assert!(store.get("default").await.is_some());
    }

    #[tokio::test]
    async fn test_apply_patch_updates_only_given_keys() {
        let store = store_with_default_project();
        let patch = AuthConfigPatch {
            customize_access_token_enabled: Some(false),
            ..Default::default()
        };

        let updated = store.apply_patch("default", &patch).await.unwrap();
        assert!(!updated.customize_access_token_enabled);
        assert_eq!(
            updated.customize_access_token_uri,
            "pg-functions://postgres/public/claims"
        );
        assert_eq!(store.get("default").await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_apply_patch_unknown_project() {
        let store = store_with_default_project();
        assert!(store
            .apply_patch("missing", &AuthConfigPatch::default())
            .await
            .is_none());
    }
}
