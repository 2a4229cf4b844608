use std::collections::{BTreeSet, HashMap};

use contracts::shared::pg_catalog::{FunctionInfo, SchemaInfo};
use once_cell::sync::OnceCell;

use crate::shared::config::ProjectConfig;

/// Схемы и функции одного проекта
#[derive(Debug, Clone, Default)]
pub struct PgCatalog {
    schemas: BTreeSet<String>,
    functions: Vec<FunctionInfo>,
}

impl PgCatalog {
    pub fn from_project(project: &ProjectConfig) -> Self {
        let mut schemas: BTreeSet<String> = project.schemas.iter().cloned().collect();
        schemas.extend(project.functions.iter().map(|f| f.schema.clone()));

        let mut functions = project.functions.clone();
        functions.sort_by(|a, b| a.schema.cmp(&b.schema).then_with(|| a.name.cmp(&b.name)));

        Self { schemas, functions }
    }

    pub fn schemas(&self) -> Vec<SchemaInfo> {
        self.schemas
            .iter()
            .map(|name| SchemaInfo { name: name.clone() })
            .collect()
    }

    /// Функции схемы, либо все функции, если схема не задана
    pub fn functions(&self, schema: Option<&str>) -> Vec<FunctionInfo> {
        self.functions
            .iter()
            .filter(|f| schema.map(|s| f.schema == s).unwrap_or(true))
            .cloned()
            .collect()
    }
}

static CATALOGS: OnceCell<HashMap<String, PgCatalog>> = OnceCell::new();

pub fn initialize(catalogs: HashMap<String, PgCatalog>) -> anyhow::Result<()> {
    CATALOGS
        .set(catalogs)
        .map_err(|_| anyhow::anyhow!("pg catalog already initialized"))
}

pub fn get_catalog(project_ref: &str) -> anyhow::Result<Option<&'static PgCatalog>> {
    let catalogs = CATALOGS
        .get()
        .ok_or_else(|| anyhow::anyhow!("pg catalog is not initialized"))?;
    Ok(catalogs.get(project_ref))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;

    fn catalog() -> PgCatalog {
        let config = parse_config(
            r#"
            [[projects]]
            ref = "p"
            organization_slug = "o"
            plan = "pro"
            schemas = ["storage", "public"]

            [[projects.functions]]
            schema = "public"
            name = "b_hook"

            [[projects.functions]]
            schema = "auth"
            name = "hook"
            return_type = "jsonb"

            [[projects.functions]]
            schema = "public"
            name = "a_hook"
            "#,
        )
        .unwrap();
        PgCatalog::from_project(&config.projects[0])
    }

    #[test]
    fn test_schemas_are_sorted_and_include_function_schemas() {
        let names: Vec<String> = catalog().schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["auth", "public", "storage"]);
    }

    #[test]
    fn test_functions_filtered_by_schema() {
        let catalog = catalog();
        let public: Vec<String> = catalog
            .functions(Some("public"))
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(public, vec!["a_hook", "b_hook"]);
        assert!(catalog.functions(Some("storage")).is_empty());
        assert_eq!(catalog.functions(None).len(), 3);
    }
}
