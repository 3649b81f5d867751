//! MCP Tools Module
//!
//! - registry.rs - Tool definitions and schema generation
//! - router.rs - Tool call parsing and dispatch

pub mod registry;
pub mod router;

pub use registry::{ToolDefinitions, create_tool_list};
pub use router::{ToolCall, ToolHandlers, dispatch, route_call, route_tool_call};
