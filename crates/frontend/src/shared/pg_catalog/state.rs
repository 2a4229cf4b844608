use contracts::shared::pg_catalog::{FunctionInfo, SchemaInfo};
use leptos::logging::log;
use leptos::prelude::*;

use super::api;
use crate::shared::api_utils::is_stale_response;

/// Результат загрузки каталога; при любой ошибке списки пустые
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub schemas: Vec<SchemaInfo>,
    pub functions: Vec<FunctionInfo>,
    pub error: Option<String>,
}

impl CatalogSnapshot {
    pub fn from_results(
        schemas: Result<Vec<SchemaInfo>, String>,
        functions: Result<Vec<FunctionInfo>, String>,
    ) -> Self {
        match (schemas, functions) {
            (Ok(schemas), Ok(functions)) => Self {
                schemas,
                functions,
                error: None,
            },
            (Err(e), _) | (_, Err(e)) => Self {
                error: Some(e),
                ..Self::default()
            },
        }
    }
}

/// Схемы и функции выбранного проекта
#[derive(Clone, Copy)]
pub struct PgCatalogState {
    pub schemas: RwSignal<Vec<SchemaInfo>>,
    pub functions: RwSignal<Vec<FunctionInfo>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Проект последнего запроса; ответы для других проектов отбрасываются
    requested: RwSignal<Option<String>>,
}

impl PgCatalogState {
    pub fn new() -> Self {
        Self {
            schemas: RwSignal::new(Vec::new()),
            functions: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            requested: RwSignal::new(None),
        }
    }

    /// Загрузка каталога; вызывается эффектом при смене проекта
    pub fn load(&self, project_ref: String) {
        let this = *self;
        this.requested.set(Some(project_ref.clone()));
        this.loading.set(true);
        this.error.set(None);
        this.schemas.set(Vec::new());
        this.functions.set(Vec::new());

        wasm_bindgen_futures::spawn_local(async move {
            let schemas = api::fetch_schemas(&project_ref).await;
            let functions = api::fetch_functions(&project_ref).await;

            if is_stale_response(this.requested.get_untracked().as_deref(), &project_ref) {
                log!("[PgCatalog] dropping catalog of {}", project_ref);
                return;
            }

            let snapshot = CatalogSnapshot::from_results(schemas, functions);
            match &snapshot.error {
                Some(e) => log!("[PgCatalog] failed to load catalog: {}", e),
                None => log!(
                    "[PgCatalog] {}: {} schemas, {} functions",
                    project_ref,
                    snapshot.schemas.len(),
                    snapshot.functions.len()
                ),
            }
            this.schemas.set(snapshot.schemas);
            this.functions.set(snapshot.functions);
            this.error.set(snapshot.error);
            this.loading.set(false);
        });
    }

    pub fn schema_names(&self) -> Signal<Vec<String>> {
        let schemas = self.schemas;
        Signal::derive(move || schemas.with(|s| s.iter().map(|s| s.name.clone()).collect()))
    }

    pub fn function_names(&self, schema: Signal<String>) -> Signal<Vec<String>> {
        let functions = self.functions;
        Signal::derive(move || {
            let schema = schema.get();
            functions.with(|all| {
                all.iter()
                    .filter(|f| f.schema == schema)
                    .map(|f| f.name.clone())
                    .collect()
            })
        })
    }
}

impl Default for PgCatalogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn function(schema: &str, name: &str) -> FunctionInfo {
        FunctionInfo {
            schema: schema.to_string(),
            name: name.to_string(),
            return_type: "jsonb".to_string(),
        }
    }

    #[test]
    fn test_snapshot_keeps_loaded_catalog() {
        let snapshot = CatalogSnapshot::from_results(
            Ok(vec![SchemaInfo {
                name: "public".to_string(),
            }]),
            Ok(vec![function("public", "my_fn")]),
        );
        assert_eq!(snapshot.schemas.len(), 1);
        assert_eq!(snapshot.functions, vec![function("public", "my_fn")]);
        assert_eq!(snapshot.error, None);
    }

    #[test]
    fn test_snapshot_is_empty_on_any_error() {
        let snapshot = CatalogSnapshot::from_results(
            Ok(vec![SchemaInfo {
                name: "public".to_string(),
            }]),
            Err("Failed to send request".to_string()),
        );
        assert!(snapshot.schemas.is_empty());
        assert!(snapshot.functions.is_empty());
        assert_eq!(snapshot.error.as_deref(), Some("Failed to send request"));

        let snapshot = CatalogSnapshot::from_results(
            Err("schemas failed".to_string()),
            Ok(vec![function("public", "my_fn")]),
        );
        assert!(snapshot.functions.is_empty());
        assert_eq!(snapshot.error.as_deref(), Some("schemas failed"));
    }
}
