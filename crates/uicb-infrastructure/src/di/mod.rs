//! Service wiring
//!
//! Composition root that turns an [`AppConfig`](crate::config::AppConfig)
//! into the catalog services the server depends on.

pub mod bootstrap;

pub use bootstrap::{AppContext, init_app};
