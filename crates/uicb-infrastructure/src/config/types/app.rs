//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{CatalogConfig, LoggingConfig, ServerConfig};

/// Root configuration, read once at startup and immutable thereafter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the component catalog lives on disk
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// MCP server identity
    #[serde(default)]
    pub server: ServerConfig,
}
