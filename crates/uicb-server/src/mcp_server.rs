//! MCP Server Implementation
//!
//! Protocol-facing server for the component catalog. It holds no state
//! beyond the injected services, so clones are cheap and every request is
//! independent.

use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::RoleServer;
use rmcp::ServerHandler;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam,
    ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use uicb_application::{
    ComponentIndexInterface, ComponentReaderInterface, ExampleServiceInterface,
    RulesServiceInterface,
};
use uicb_infrastructure::config::ServerConfig;

use crate::constants::DEFAULT_INSTRUCTIONS;
use crate::handlers::{
    GetComponentExampleHandler, GetComponentInfoHandler, GetRulesHandler, ListComponentsHandler,
};
use crate::tools::{ToolHandlers, create_tool_list, route_tool_call};

/// Core MCP server implementation
///
/// Depends only on the application ports; all services arrive through
/// the constructor.
#[derive(Clone)]
pub struct UiComponentsServer {
    server_config: ServerConfig,
    handlers: ToolHandlers,
}

impl UiComponentsServer {
    /// Create a new MCP server with injected services
    pub fn new(
        server_config: ServerConfig,
        component_index: Arc<dyn ComponentIndexInterface>,
        component_reader: Arc<dyn ComponentReaderInterface>,
        example_service: Arc<dyn ExampleServiceInterface>,
        rules_service: Arc<dyn RulesServiceInterface>,
    ) -> Self {
        let handlers = ToolHandlers {
            list_components: Arc::new(ListComponentsHandler::new(component_index)),
            get_component_info: Arc::new(GetComponentInfoHandler::new(component_reader)),
            get_component_example: Arc::new(GetComponentExampleHandler::new(example_service)),
            get_rules: Arc::new(GetRulesHandler::new(rules_service)),
        };

        Self {
            server_config,
            handlers,
        }
    }

    /// Handlers used for tool dispatch
    pub fn handlers(&self) -> &ToolHandlers {
        &self.handlers
    }

    /// Usage instructions advertised to clients
    pub fn instructions(&self) -> &str {
        self.server_config
            .instructions
            .as_deref()
            .unwrap_or(DEFAULT_INSTRUCTIONS)
    }
}

impl ServerHandler for UiComponentsServer {
    /// Get server information and capabilities
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.server_config.name.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(self.instructions().to_string()),
        }
    }

    /// List available tools
    async fn list_tools(
        &self,
        _pagination: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = create_tool_list()?;
        Ok(ListToolsResult {
            tools,
            meta: Default::default(),
            next_cursor: None,
        })
    }

    /// Call a tool
    ///
    /// Never fails at the protocol level; errors come back as envelopes.
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        Ok(route_tool_call(request, &self.handlers).await)
    }
}
