//! Configuration types module

pub mod app;
pub mod catalog;
pub mod logging;
pub mod server;

pub use app::AppConfig;
pub use catalog::CatalogConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
