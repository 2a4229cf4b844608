use axum::{routing::get, Router};

use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // PROJECT / ACCESS
        // ========================================
        .route(
            "/api/projects/current",
            get(system::handlers::access::current_project),
        )
        .route("/api/projects/:ref", get(system::handlers::access::project))
        .route(
            "/api/projects/:ref/permissions",
            get(system::handlers::access::permissions),
        )
        .route(
            "/api/organizations/:slug/subscription",
            get(system::handlers::access::subscription),
        )
        // ========================================
        // A001 AUTH HOOKS
        // ========================================
        .route(
            "/api/projects/:ref/config/auth",
            get(handlers::a001_auth_hooks::get_config)
                .patch(handlers::a001_auth_hooks::update_config),
        )
        // ========================================
        // A002 PG CATALOG
        // ========================================
        .route(
            "/api/projects/:ref/pg-meta/schemas",
            get(handlers::a002_pg_catalog::list_schemas),
        )
        .route(
            "/api/projects/:ref/pg-meta/functions",
            get(handlers::a002_pg_catalog::list_functions),
        )
}
