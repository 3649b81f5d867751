//! # UI Components Browser Server
//!
//! MCP protocol server exposing a UI component library to agents.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use uicb_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Default config search path, catalog rooted at the working directory
//!     run(None, None).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Tools
//!
//! | Tool | Description |
//! |------|-------------|
//! | `list_components` | Component directories, optionally filtered by category |
//! | `get_component_info` | A component's main source file |
//! | `get_component_example` | A markdown usage example |
//! | `get_rules` | The UI rules document |
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`UiComponentsServer`] | Main server struct |
//! | [`UiComponentsServerBuilder`] | Builder wiring the catalog services |

pub mod args;
pub mod builder;
pub mod constants;
pub mod formatter;
pub mod handlers;
pub mod init;
pub mod mcp_server;
pub mod tools;
pub mod transport;

pub use builder::UiComponentsServerBuilder;
pub use init::run;
pub use mcp_server::UiComponentsServer;
