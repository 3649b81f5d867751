//! Domain Value Objects
//!
//! Immutable value objects describing the component catalog.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ComponentEntry`] | One listed component directory |
//! | [`ScanOutcome`] | Per-entry result of scanning the component root |
//! | [`SourceDocument`] | Raw text of one file |
//! | [`CatalogLayout`] | Where the catalog lives on disk |

/// Component catalog value objects
pub mod component;
/// Resolved catalog layout
pub mod layout;

pub use component::{
    ComponentEntry, ComponentKind, ComponentSource, ScanOutcome, SkipReason, SourceDocument,
};
pub use layout::CatalogLayout;
