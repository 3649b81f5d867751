//! Server-specific constants
//!
//! Wire names of the MCP tools and the default usage instructions.

/// List component directories
pub const TOOL_LIST_COMPONENTS: &str = "list_components";

/// Read a component's main source file
pub const TOOL_GET_COMPONENT_INFO: &str = "get_component_info";

/// Read a usage example fragment
pub const TOOL_GET_COMPONENT_EXAMPLE: &str = "get_component_example";

/// Read the rules document
pub const TOOL_GET_RULES: &str = "get_rules";

/// Every tool name, in listing order
pub const TOOL_NAMES: [&str; 4] = [
    TOOL_LIST_COMPONENTS,
    TOOL_GET_COMPONENT_INFO,
    TOOL_GET_COMPONENT_EXAMPLE,
    TOOL_GET_RULES,
];

/// Usage instructions advertised during initialization
pub const DEFAULT_INSTRUCTIONS: &str = "UI Components Browser\n\n\
     Read-only access to the project's UI component library.\n\n\
     Tools:\n\
     - list_components: List component directories, optionally filtered by category\n\
     - get_component_info: Get the main source file of a component\n\
     - get_component_example: Get a usage example for a component (default: Basic)\n\
     - get_rules: Get the UI development rules document\n";
