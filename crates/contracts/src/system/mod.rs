pub mod access;
pub mod projects;
