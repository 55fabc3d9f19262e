pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use errors::DevProxyError;
pub use models::{DevServerConfig, ProxyRule, ProxyTable, Rewrite};
