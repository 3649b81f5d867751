//! MCP server identity configuration

use crate::constants::DEFAULT_SERVER_NAME;
use serde::{Deserialize, Serialize};

/// Server identity advertised during MCP initialization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server name reported to clients
    pub name: String,

    /// Replaces the built-in usage instructions when set
    pub instructions: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            instructions: None,
        }
    }
}
