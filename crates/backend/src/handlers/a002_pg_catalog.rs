use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::shared::pg_catalog::{FunctionInfo, FunctionsQuery, SchemaInfo};

use crate::domain::a002_pg_catalog;
use crate::shared::error::ApiError;

/// GET /api/projects/:ref/pg-meta/schemas
pub async fn list_schemas(
    Path(project_ref): Path<String>,
) -> Result<Json<Vec<SchemaInfo>>, ApiError> {
    a002_pg_catalog::service::list_schemas(&project_ref).map(Json)
}

/// GET /api/projects/:ref/pg-meta/functions?schema=
pub async fn list_functions(
    Path(project_ref): Path<String>,
    Query(query): Query<FunctionsQuery>,
) -> Result<Json<Vec<FunctionInfo>>, ApiError> {
    a002_pg_catalog::service::list_functions(&project_ref, query.schema.as_deref()).map(Json)
}
