//! Auth Hooks settings UI
//!
//! - model.rs: API functions (fetch config, update config, access)
//! - view_model.rs: form state, change detection and submit
//! - schema_function_selector.rs: schema → function picker bound to one form field
//! - form.rs: generic hooks form (Basic / Enterprise)
//! - page.rs: page that wires collaborators into both forms

mod form;
pub mod model;
mod page;
mod schema_function_selector;
mod view_model;

pub use form::HooksFormView;
pub use page::AuthHooksPage;
pub use schema_function_selector::SchemaFunctionSelector;
pub use view_model::{ConfigLoadState, HooksFormViewModel};
