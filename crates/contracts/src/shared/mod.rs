pub mod api_error;
pub mod pg_catalog;
