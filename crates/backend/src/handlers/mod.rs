pub mod a001_auth_hooks;
pub mod a002_pg_catalog;
