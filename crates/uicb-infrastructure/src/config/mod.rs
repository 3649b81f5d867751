//! Configuration
//!
//! Figment-layered configuration: defaults, then a TOML file, then
//! `UICB_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
