//! Response formatting for MCP tool results
//!
//! Turns catalog values into text content. Content read from disk is
//! passed through unmodified.

use rmcp::model::{CallToolResult, Content};
use uicb_domain::error::{Error, Result};
use uicb_domain::value_objects::{ComponentEntry, ComponentSource, SourceDocument};

/// Response formatter for the catalog tools
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Pretty-printed JSON array of component entries
    pub fn format_component_list(entries: &[ComponentEntry]) -> Result<CallToolResult> {
        let json = serde_json::to_string_pretty(entries)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Component name header followed by the main file content
    pub fn format_component_source(source: &ComponentSource) -> CallToolResult {
        let message = format!(
            "Component: {}\n\nSource:\n{}",
            source.name, source.document.content
        );
        CallToolResult::success(vec![Content::text(message)])
    }

    /// Raw document text
    pub fn format_document(document: &SourceDocument) -> CallToolResult {
        CallToolResult::success(vec![Content::text(document.content.clone())])
    }

    /// Error envelope carrying the error's display text
    pub fn format_error(error: &Error) -> CallToolResult {
        CallToolResult::error(vec![Content::text(format!("Error: {error}"))])
    }
}
