//! Каталог схем и функций проекта
//!
//! - api.rs: загрузка схем и функций
//! - state.rs: состояние каталога, загружаемое при смене проекта
//! - schema_selector.rs / function_selector.rs: выпадающие списки

pub mod api;
mod function_selector;
mod schema_selector;
mod state;

pub use function_selector::FunctionSelector;
pub use schema_selector::SchemaSelector;
pub use state::PgCatalogState;
