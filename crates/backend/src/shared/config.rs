use contracts::domain::a001_auth_hooks::aggregate::AuthHooksConfig;
use contracts::shared::pg_catalog::FunctionInfo;
use contracts::system::access::PlanId;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub projects: Vec<ProjectConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

/// Проект и всё, что о нём знает dev API
#[derive(Debug, Deserialize, Clone)]
pub struct ProjectConfig {
    #[serde(rename = "ref")]
    pub project_ref: String,
    pub organization_slug: String,
    pub plan: PlanId,
    #[serde(default)]
    pub can_update_auth_config: bool,
    /// Начальные значения конфигурации хуков (ключи как в API)
    #[serde(default)]
    pub auth_hooks: AuthHooksConfig,
    /// Схемы без функций тоже попадают в каталог
    #[serde(default)]
    pub schemas: Vec<String>,
    #[serde(default)]
    pub functions: Vec<FunctionInfo>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[[projects]]
ref = "default"
organization_slug = "default-org"
plan = "team"
can_update_auth_config = true
schemas = ["public", "auth", "extensions"]

[projects.auth_hooks]
HOOK_CUSTOMIZE_ACCESS_TOKEN_URI = "pg-functions://postgres/public/custom_access_token_hook"
HOOK_CUSTOMIZE_ACCESS_TOKEN_ENABLED = true

[[projects.functions]]
schema = "public"
name = "custom_access_token_hook"
return_type = "jsonb"

[[projects.functions]]
schema = "public"
name = "mfa_verification_attempt_hook"
return_type = "jsonb"

[[projects.functions]]
schema = "public"
name = "password_verification_attempt_hook"
return_type = "jsonb"

[[projects.functions]]
schema = "auth"
name = "custom_access_token_hook"
return_type = "jsonb"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Разбор и проверка конфигурации
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.projects.is_empty() {
        anyhow::bail!("config must declare at least one [[projects]] entry");
    }
    for project in &config.projects {
        if project.project_ref.trim().is_empty() {
            anyhow::bail!("project ref must not be empty");
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.projects.len(), 1);

        let project = &config.projects[0];
        assert_eq!(project.project_ref, "default");
        assert_eq!(project.plan, PlanId::Team);
        assert!(project.can_update_auth_config);
        assert_eq!(
            project.auth_hooks.customize_access_token_uri,
            "pg-functions://postgres/public/custom_access_token_hook"
        );
        assert!(project.auth_hooks.customize_access_token_enabled);
        assert_eq!(project.auth_hooks.mfa_verification_attempt_uri, "");
        assert_eq!(project.functions.len(), 4);
    }

    #[test]
    fn test_minimal_project_uses_defaults() {
        let config = parse_config(
            r#"
            [[projects]]
            ref = "abc"
            organization_slug = "acme"
            plan = "free"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 3000);
        let project = &config.projects[0];
        assert!(!project.can_update_auth_config);
        assert_eq!(project.auth_hooks, AuthHooksConfig::default());
        assert!(project.functions.is_empty());
    }

    #[test]
    fn test_config_without_projects_is_rejected() {
        assert!(parse_config("projects = []").is_err());
    }
}
