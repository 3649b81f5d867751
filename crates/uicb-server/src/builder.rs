//! MCP Server Builder
//!
//! Ensures every catalog service is provided before the server is built.

use std::sync::Arc;

use uicb_application::{
    ComponentIndexInterface, ComponentReaderInterface, ExampleServiceInterface,
    RulesServiceInterface,
};
use uicb_infrastructure::config::ServerConfig;
use uicb_infrastructure::di::AppContext;

use crate::UiComponentsServer;

/// Builder for [`UiComponentsServer`]
#[derive(Default)]
pub struct UiComponentsServerBuilder {
    server_config: Option<ServerConfig>,
    component_index: Option<Arc<dyn ComponentIndexInterface>>,
    component_reader: Option<Arc<dyn ComponentReaderInterface>>,
    example_service: Option<Arc<dyn ExampleServiceInterface>>,
    rules_service: Option<Arc<dyn RulesServiceInterface>>,
}

impl UiComponentsServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-filled with every service of an application context
    pub fn from_context(context: &AppContext) -> Self {
        Self::new()
            .with_server_config(context.config.server.clone())
            .with_component_index(context.component_index())
            .with_component_reader(context.component_reader())
            .with_example_service(context.example_service())
            .with_rules_service(context.rules_service())
    }

    /// Set the server identity; defaults apply when not set
    pub fn with_server_config(mut self, config: ServerConfig) -> Self {
        self.server_config = Some(config);
        self
    }

    /// Set the component index service
    pub fn with_component_index(mut self, service: Arc<dyn ComponentIndexInterface>) -> Self {
        self.component_index = Some(service);
        self
    }

    /// Set the component reader service
    pub fn with_component_reader(mut self, service: Arc<dyn ComponentReaderInterface>) -> Self {
        self.component_reader = Some(service);
        self
    }

    /// Set the example service
    pub fn with_example_service(mut self, service: Arc<dyn ExampleServiceInterface>) -> Self {
        self.example_service = Some(service);
        self
    }

    /// Set the rules service
    pub fn with_rules_service(mut self, service: Arc<dyn RulesServiceInterface>) -> Self {
        self.rules_service = Some(service);
        self
    }

    /// Build the MCP server
    ///
    /// # Errors
    /// Returns `BuilderError::MissingDependency` if any service is not provided
    pub fn build(self) -> Result<UiComponentsServer, BuilderError> {
        let component_index = self
            .component_index
            .ok_or(BuilderError::MissingDependency("component index"))?;
        let component_reader = self
            .component_reader
            .ok_or(BuilderError::MissingDependency("component reader"))?;
        let example_service = self
            .example_service
            .ok_or(BuilderError::MissingDependency("example service"))?;
        let rules_service = self
            .rules_service
            .ok_or(BuilderError::MissingDependency("rules service"))?;

        Ok(UiComponentsServer::new(
            self.server_config.unwrap_or_default(),
            component_index,
            component_reader,
            example_service,
            rules_service,
        ))
    }
}

/// Errors that can occur during server building
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// A required dependency was not provided
    #[error("Missing required dependency: {0}")]
    MissingDependency(&'static str),
}
