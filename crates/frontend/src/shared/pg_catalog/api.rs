use contracts::shared::pg_catalog::{FunctionInfo, SchemaInfo};

use crate::shared::api_utils::{get_json, path_segment};

pub fn schemas_path(project_ref: &str) -> String {
    format!("/api/projects/{}/pg-meta/schemas", path_segment(project_ref))
}

pub fn functions_path(project_ref: &str) -> String {
    format!("/api/projects/{}/pg-meta/functions", path_segment(project_ref))
}

pub async fn fetch_schemas(project_ref: &str) -> Result<Vec<SchemaInfo>, String> {
    get_json(&schemas_path(project_ref)).await
}

/// Все функции проекта; фильтрация по схеме делается на клиенте
pub async fn fetch_functions(project_ref: &str) -> Result<Vec<FunctionInfo>, String> {
    get_json(&functions_path(project_ref)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(schemas_path("default"), "/api/projects/default/pg-meta/schemas");
        assert_eq!(
            functions_path("default"),
            "/api/projects/default/pg-meta/functions"
        );
    }
}
