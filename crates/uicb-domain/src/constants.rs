//! Domain layer constants
//!
//! Catalog conventions shared by the application and infrastructure layers.
//! Infrastructure-specific constants remain in `uicb_infrastructure::constants`.

// ============================================================================
// CATALOG LAYOUT CONSTANTS
// ============================================================================

/// Component root, relative to the base directory
pub const DEFAULT_COMPONENTS_DIR: &str = "demo/src/components/ui";

/// Documentation tree root, relative to the base directory
pub const DEFAULT_DOCS_DIR: &str = "demo/src/assets/markdown/ui-components";

/// Rules document, relative to the base directory
pub const DEFAULT_RULES_FILE: &str = "UIGOD-RULES.MD";

/// File extensions that mark a file as component source
pub const DEFAULT_SOURCE_EXTENSIONS: [&str; 2] = ["tsx", "jsx"];

/// Stem of the conventional entry file inside a component directory
pub const DEFAULT_INDEX_FILE_STEM: &str = "index";

/// Extension of documentation fragments
pub const DEFAULT_DOC_EXTENSION: &str = "md";

/// Example category used when a request names none
pub const DEFAULT_EXAMPLE_TYPE: &str = "Basic";
