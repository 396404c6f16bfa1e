//! Static link directory server library

pub mod assets;
pub mod config;
pub mod content;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod render;
pub mod routing;
pub mod security;

pub use config::schema::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
