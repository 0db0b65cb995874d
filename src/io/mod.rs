pub mod api_client;
pub mod config_io;
pub mod loader;
pub mod logging;
