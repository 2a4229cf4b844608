pub mod a001_auth_hooks;
