use contracts::shared::pg_catalog::{FunctionInfo, SchemaInfo};

use super::repository::{self, PgCatalog};
use crate::shared::error::ApiError;

fn catalog(project_ref: &str) -> Result<&'static PgCatalog, ApiError> {
    repository::get_catalog(project_ref)?
        .ok_or_else(|| ApiError::NotFound(format!("Project {} not found", project_ref)))
}

pub fn list_schemas(project_ref: &str) -> Result<Vec<SchemaInfo>, ApiError> {
    Ok(catalog(project_ref)?.schemas())
}

pub fn list_functions(
    project_ref: &str,
    schema: Option<&str>,
) -> Result<Vec<FunctionInfo>, ApiError> {
    let schema = schema.filter(|s| !s.is_empty());
    Ok(catalog(project_ref)?.functions(schema))
}
