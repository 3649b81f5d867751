//! MCP Transport Layer
//!
//! The catalog is served over stdio only; stdout carries protocol frames.
//!
//! ```rust,ignore
//! use uicb_server::transport::StdioServerExt;
//!
//! server.serve_stdio().await?;
//! ```

pub mod stdio;

pub use stdio::StdioServerExt;
