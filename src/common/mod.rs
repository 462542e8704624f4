pub mod authentication;
pub mod config;
pub mod http_client;
