//! UI Components Browser - Entry Point
//!
//! Serves the component catalog over MCP on stdio. Logs go to stderr.
//!
//! | Flag | Description |
//! |------|-------------|
//! | `--config <path>` | Configuration file (otherwise the default search path) |
//! | `--base-dir <path>` | Project root, overrides `catalog.base_dir` |

use clap::Parser;
use uicb::run;

/// Command line interface for the UI Components Browser
#[derive(Parser, Debug)]
#[command(name = "uicb")]
#[command(about = "UI Components Browser - MCP server for a UI component library")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Project root containing the component library
    #[arg(short, long)]
    pub base_dir: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref(), cli.base_dir.as_deref()).await
}
