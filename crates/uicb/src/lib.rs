//! # UI Components Browser
//!
//! A Model Context Protocol server that lets agents browse a UI component
//! library: list components, read their source, fetch usage examples and
//! read the project's UI rules.
//!
//! ## Architecture
//!
//! - `domain` - Catalog value objects and the error type
//! - `infrastructure` - Configuration, logging and service wiring
//! - `server` - MCP tools, handlers and the stdio transport

/// Domain layer - catalog types and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use uicb_domain::*;
}

/// Server layer - MCP protocol server and handlers
///
/// Re-exports from the server crate for convenience
pub mod server {
    pub use uicb_server::*;
}

/// Infrastructure layer - config, logging and wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use uicb_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export main entry point at the crate root
pub use server::run;

// Re-export server types for convenience
pub use server::{UiComponentsServer, UiComponentsServerBuilder};
