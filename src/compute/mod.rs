pub mod http_client;
pub mod types;
pub mod utils;
