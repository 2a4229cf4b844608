pub mod api_utils;
pub mod components;
pub mod notifications;
pub mod pg_catalog;
