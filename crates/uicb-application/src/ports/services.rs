//! Application Service Port Interfaces
//!
//! Contracts for the four catalog operations. The server layer depends on
//! these traits only, never on the filesystem implementations.

use async_trait::async_trait;
use uicb_domain::error::Result;
use uicb_domain::value_objects::{ComponentEntry, ComponentSource, SourceDocument};

// ============================================================================
// Component Directory Index
// ============================================================================

/// Component Directory Index Interface
#[async_trait]
pub trait ComponentIndexInterface: Send + Sync {
    /// List component directories in listing order
    ///
    /// When `category` is given, only entries whose path contains it
    /// (case-insensitively) are returned.
    async fn list_components(&self, category: Option<&str>) -> Result<Vec<ComponentEntry>>;
}

// ============================================================================
// Component Detail Reader
// ============================================================================

/// Component Detail Reader Interface
#[async_trait]
pub trait ComponentReaderInterface: Send + Sync {
    /// Resolve and read the main source file of a component
    async fn read_component(&self, name: &str) -> Result<ComponentSource>;
}

// ============================================================================
// Example Fetcher
// ============================================================================

/// Example Fetcher Interface
#[async_trait]
pub trait ExampleServiceInterface: Send + Sync {
    /// Read `<docs-root>/<component>/<example_type>.<doc-ext>`
    ///
    /// `None` selects the configured default example type.
    async fn get_example(
        &self,
        component: &str,
        example_type: Option<&str>,
    ) -> Result<SourceDocument>;
}

// ============================================================================
// Static Rules Fetcher
// ============================================================================

/// Static Rules Fetcher Interface
#[async_trait]
pub trait RulesServiceInterface: Send + Sync {
    /// Read the configured rules document
    async fn get_rules(&self) -> Result<SourceDocument>;
}
