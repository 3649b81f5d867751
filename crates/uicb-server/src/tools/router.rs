//! Tool Router Module
//!
//! Parses incoming tool calls into the closed [`ToolCall`] set and
//! dispatches them. Every failure, including an unknown tool name, comes
//! back as an error envelope rather than a protocol error.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolRequestParam, CallToolResult, JsonObject};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uicb_domain::error::{Error, Result};

use crate::args::{GetComponentExampleArgs, GetComponentInfoArgs, GetRulesArgs, ListComponentsArgs};
use crate::constants::{
    TOOL_GET_COMPONENT_EXAMPLE, TOOL_GET_COMPONENT_INFO, TOOL_GET_RULES, TOOL_LIST_COMPONENTS,
};
use crate::formatter::ResponseFormatter;
use crate::handlers::{
    GetComponentExampleHandler, GetComponentInfoHandler, GetRulesHandler, ListComponentsHandler,
};

/// Handler references for tool routing
#[derive(Clone)]
pub struct ToolHandlers {
    /// Handler for component listing
    pub list_components: Arc<ListComponentsHandler>,
    /// Handler for component source lookups
    pub get_component_info: Arc<GetComponentInfoHandler>,
    /// Handler for usage example lookups
    pub get_component_example: Arc<GetComponentExampleHandler>,
    /// Handler for the rules document
    pub get_rules: Arc<GetRulesHandler>,
}

/// A decoded tool call
#[derive(Debug, Clone)]
pub enum ToolCall {
    /// `list_components`
    ListComponents(ListComponentsArgs),
    /// `get_component_info`
    GetComponentInfo(GetComponentInfoArgs),
    /// `get_component_example`
    GetComponentExample(GetComponentExampleArgs),
    /// `get_rules`
    GetRules(GetRulesArgs),
}

impl ToolCall {
    /// Decode a wire tool name and its argument object
    ///
    /// Missing arguments decode as an empty object.
    pub fn parse(name: &str, arguments: Option<JsonObject>) -> Result<Self> {
        match name {
            TOOL_LIST_COMPONENTS => parse_args(arguments).map(Self::ListComponents),
            TOOL_GET_COMPONENT_INFO => parse_args(arguments).map(Self::GetComponentInfo),
            TOOL_GET_COMPONENT_EXAMPLE => parse_args(arguments).map(Self::GetComponentExample),
            TOOL_GET_RULES => parse_args(arguments).map(Self::GetRules),
            _ => Err(Error::unknown_operation(name)),
        }
    }

    /// Wire name of this call
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListComponents(_) => TOOL_LIST_COMPONENTS,
            Self::GetComponentInfo(_) => TOOL_GET_COMPONENT_INFO,
            Self::GetComponentExample(_) => TOOL_GET_COMPONENT_EXAMPLE,
            Self::GetRules(_) => TOOL_GET_RULES,
        }
    }
}

/// Run a decoded call against its handler
pub async fn dispatch(call: ToolCall, handlers: &ToolHandlers) -> Result<CallToolResult> {
    match call {
        ToolCall::ListComponents(args) => handlers.list_components.handle(Parameters(args)).await,
        ToolCall::GetComponentInfo(args) => {
            handlers.get_component_info.handle(Parameters(args)).await
        }
        ToolCall::GetComponentExample(args) => {
            handlers.get_component_example.handle(Parameters(args)).await
        }
        ToolCall::GetRules(args) => handlers.get_rules.handle(Parameters(args)).await,
    }
}

/// Route a named call, converting any failure into an error envelope
pub async fn route_call(
    name: &str,
    arguments: Option<JsonObject>,
    handlers: &ToolHandlers,
) -> CallToolResult {
    debug!(tool = name, "Tool call received");

    let result = match ToolCall::parse(name, arguments) {
        Ok(call) => dispatch(call, handlers).await,
        Err(e) => Err(e),
    };

    result.unwrap_or_else(|error| {
        warn!(tool = name, kind = error.kind(), error = %error, "Tool call failed");
        ResponseFormatter::format_error(&error)
    })
}

/// Route an MCP tool call request
pub async fn route_tool_call(
    request: CallToolRequestParam,
    handlers: &ToolHandlers,
) -> CallToolResult {
    route_call(request.name.as_ref(), request.arguments, handlers).await
}

fn parse_args<T: DeserializeOwned>(arguments: Option<JsonObject>) -> Result<T> {
    let value = serde_json::Value::Object(arguments.unwrap_or_default());
    serde_json::from_value(value).map_err(|e| Error::invalid_argument(e.to_string()))
}
