//! Tool Registry Module
//!
//! Tool metadata served through `tools/list`. Input schemas are generated
//! from the argument structs so they cannot drift from what the router
//! accepts.

use std::borrow::Cow;
use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::model::Tool;

use crate::args::{GetComponentExampleArgs, GetComponentInfoArgs, GetRulesArgs, ListComponentsArgs};
use crate::constants::{
    TOOL_GET_COMPONENT_EXAMPLE, TOOL_GET_COMPONENT_INFO, TOOL_GET_RULES, TOOL_LIST_COMPONENTS,
};

/// Tool definitions for MCP protocol
pub struct ToolDefinitions;

impl ToolDefinitions {
    /// Get the list_components tool definition
    pub fn list_components() -> Result<Tool, McpError> {
        Self::create_tool(
            TOOL_LIST_COMPONENTS,
            "List all available UI components, optionally filtered by category",
            schemars::schema_for!(ListComponentsArgs),
        )
    }

    /// Get the get_component_info tool definition
    pub fn get_component_info() -> Result<Tool, McpError> {
        Self::create_tool(
            TOOL_GET_COMPONENT_INFO,
            "Get the main source file of a UI component",
            schemars::schema_for!(GetComponentInfoArgs),
        )
    }

    /// Get the get_component_example tool definition
    pub fn get_component_example() -> Result<Tool, McpError> {
        Self::create_tool(
            TOOL_GET_COMPONENT_EXAMPLE,
            "Get a usage example for a UI component",
            schemars::schema_for!(GetComponentExampleArgs),
        )
    }

    /// Get the get_rules tool definition
    pub fn get_rules() -> Result<Tool, McpError> {
        Self::create_tool(
            TOOL_GET_RULES,
            "Get the UI development rules and guidelines",
            schemars::schema_for!(GetRulesArgs),
        )
    }

    /// Create a tool from schema
    fn create_tool(
        name: &'static str,
        description: &'static str,
        schema: schemars::Schema,
    ) -> Result<Tool, McpError> {
        let schema_value = serde_json::to_value(schema)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let input_schema = schema_value
            .as_object()
            .ok_or_else(|| {
                McpError::internal_error(format!("Schema for {name} is not an object"), None)
            })?
            .clone();

        Ok(Tool {
            name: Cow::Borrowed(name),
            title: None,
            description: Some(Cow::Borrowed(description)),
            input_schema: Arc::new(input_schema),
            output_schema: None,
            annotations: None,
            icons: None,
            meta: Default::default(),
        })
    }
}

/// Create the complete list of available tools
pub fn create_tool_list() -> Result<Vec<Tool>, McpError> {
    Ok(vec![
        ToolDefinitions::list_components()?,
        ToolDefinitions::get_component_info()?,
        ToolDefinitions::get_component_example()?,
        ToolDefinitions::get_rules()?,
    ])
}
