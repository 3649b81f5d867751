//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Catalog conventions are defined in `uicb_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "uicb.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "uicb";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "UICB";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log filter
pub const LOG_FILTER_ENV: &str = "UICB_LOG";

/// File stem used for rolling log files when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "uicb";

// ============================================================================
// SERVER CONSTANTS
// ============================================================================

/// Name advertised in the MCP server info
pub const DEFAULT_SERVER_NAME: &str = "ui-components-server";
