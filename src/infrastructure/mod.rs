pub mod api_client;
pub mod clipboard;
pub mod config;
pub mod env_file;
