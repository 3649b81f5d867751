//! Tool argument types for the MCP server
//!
//! Argument keys are camelCase on the wire. Names that end up as path
//! segments are validated so that a request never leaves the component
//! or documentation roots.

use schemars::JsonSchema;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Arguments for the list_components tool
#[derive(Debug, Default, Clone, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[schemars(description = "Parameters for listing UI components")]
pub struct ListComponentsArgs {
    /// Optional case-insensitive filter matched against component paths
    #[schemars(description = "Filter components whose path contains this text (case-insensitive)")]
    pub category: Option<String>,
}

/// Arguments for the get_component_info tool
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[schemars(description = "Parameters for reading a component's source")]
pub struct GetComponentInfoArgs {
    /// Component directory name
    #[validate(custom(function = "validate_path_segment", message = "Invalid component name"))]
    #[schemars(description = "Name of the component (e.g. 'Button')")]
    pub component_name: String,
}

/// Arguments for the get_component_example tool
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[schemars(description = "Parameters for reading a component usage example")]
pub struct GetComponentExampleArgs {
    /// Component directory name
    #[validate(custom(function = "validate_path_segment", message = "Invalid component name"))]
    #[schemars(description = "Name of the component (e.g. 'Button')")]
    pub component_name: String,

    /// Example category; the configured default applies when absent
    #[validate(custom(function = "validate_path_segment", message = "Invalid example type"))]
    #[schemars(description = "Type of example to fetch (e.g. 'Basic', 'Advanced'). Defaults to 'Basic'")]
    pub example_type: Option<String>,
}

/// Arguments for the get_rules tool
#[derive(Debug, Default, Clone, Deserialize, JsonSchema, Validate)]
#[schemars(description = "The rules tool takes no parameters")]
pub struct GetRulesArgs {}

/// A name is joined onto a root directory, so it must be exactly one
/// normal path segment
fn validate_path_segment(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("empty_segment"));
    }

    if value == "." || value == ".." {
        return Err(ValidationError::new("relative_segment"));
    }

    if value.contains(['/', '\\', '\0']) {
        return Err(ValidationError::new("path_separator"));
    }

    Ok(())
}
