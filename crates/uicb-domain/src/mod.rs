//! # Domain Layer
//!
//! Core types of the UI Components Browser: the catalog value objects and
//! the error taxonomy shared by every other crate. This crate performs no
//! I/O.

pub mod constants;
pub mod error;
pub mod value_objects;

pub use error::{Error, NotFoundReason, Result};
pub use value_objects::{
    CatalogLayout, ComponentEntry, ComponentKind, ComponentSource, ScanOutcome, SkipReason,
    SourceDocument,
};
