//! Server Initialization
//!
//! Startup sequence: load configuration, apply command-line overrides,
//! initialize logging, wire the catalog services and serve over stdio.

use std::path::{Path, PathBuf};

use tracing::info;
use uicb_infrastructure::config::{AppConfig, ConfigLoader};
use uicb_infrastructure::di::init_app;
use uicb_infrastructure::logging::init_logging;

use crate::UiComponentsServer;
use crate::builder::UiComponentsServerBuilder;
use crate::transport::StdioServerExt;

/// Run the UI Components Browser server
///
/// `base_dir` replaces `catalog.base_dir` from the loaded configuration.
pub async fn run(
    config_path: Option<&Path>,
    base_dir: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path, base_dir)?;
    init_logging(&config.logging)?;

    info!(
        name = %config.server.name,
        base_dir = %config.catalog.base_dir.display(),
        "Starting UI Components Browser server"
    );

    let server = create_server(config)?;
    info!("MCP server initialized successfully");

    server.serve_stdio().await
}

/// Load configuration and apply the base directory override
pub fn load_config(
    config_path: Option<&Path>,
    base_dir: Option<&Path>,
) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load()?;
    if let Some(dir) = base_dir {
        config.catalog.base_dir = PathBuf::from(dir);
    }
    Ok(config)
}

/// Wire the catalog services into a server
pub fn create_server(config: AppConfig) -> Result<UiComponentsServer, Box<dyn std::error::Error>> {
    let context = init_app(config)?;
    Ok(UiComponentsServerBuilder::from_context(&context).build()?)
}
