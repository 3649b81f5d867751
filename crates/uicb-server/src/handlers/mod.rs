//! MCP Tool Handlers
//!
//! Each handler translates one MCP tool call into a catalog service call.
//! Failures are returned as domain errors; the router turns them into
//! error envelopes.

pub mod get_component_example;
pub mod get_component_info;
pub mod get_rules;
pub mod list_components;

pub use get_component_example::GetComponentExampleHandler;
pub use get_component_info::GetComponentInfoHandler;
pub use get_rules::GetRulesHandler;
pub use list_components::ListComponentsHandler;

use uicb_domain::error::{Error, Result};
use validator::Validate;

fn validate_args<T: Validate>(args: &T) -> Result<()> {
    args.validate()
        .map_err(|e| Error::invalid_argument(e.to_string()))
}
