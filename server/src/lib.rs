pub mod agent;
pub mod cleanup_task;
pub mod server_config;
pub mod session;
pub mod web_server;
