//! Filesystem-backed use case implementations

pub mod component_index_service;
pub mod component_reader_service;
pub mod example_service;
mod fs_probe;
pub mod rules_service;

pub use component_index_service::{ComponentIndexServiceImpl, scan_components};
pub use component_reader_service::ComponentReaderServiceImpl;
pub use example_service::ExampleServiceImpl;
pub use rules_service::RulesServiceImpl;
