//! Application Layer - UI Components Browser
//!
//! Use cases that answer catalog queries by reading the component tree.
//!
//! ## Ports (Interfaces)
//!
//! - [`ComponentIndexInterface`]: list component directories
//! - [`ComponentReaderInterface`]: read a component's main source file
//! - [`ExampleServiceInterface`]: read a documentation fragment
//! - [`RulesServiceInterface`]: read the rules document
//!
//! ## Use Cases
//!
//! One filesystem-backed implementation per port in [`use_cases`]. All of
//! them are stateless apart from the shared, immutable
//! [`CatalogLayout`](uicb_domain::CatalogLayout); every call re-reads the
//! filesystem.

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
