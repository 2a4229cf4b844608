pub mod aggregate;
pub mod form_state;
pub mod identifier;
pub mod selector;
