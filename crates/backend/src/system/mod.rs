pub mod access;
pub mod handlers;
pub mod initialization;
pub mod request_logger;
pub mod tracing;
