pub mod core;
pub mod environment;
pub mod types;
pub mod utils;
pub mod web;

pub use environment::EnvironmentConfig;
pub use web::start_web_server;
