//! Example Fetcher Use Case
//!
//! Exact path construction only: no fallback search and no fuzzy matching
//! of example categories.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;
use uicb_domain::error::{Error, Result};
use uicb_domain::value_objects::{CatalogLayout, SourceDocument};

use crate::ports::ExampleServiceInterface;

/// Reads documentation fragments from the docs tree
pub struct ExampleServiceImpl {
    layout: Arc<CatalogLayout>,
}

impl ExampleServiceImpl {
    /// Create a new example fetcher
    pub fn new(layout: Arc<CatalogLayout>) -> Self {
        Self { layout }
    }
}

#[async_trait]
impl ExampleServiceInterface for ExampleServiceImpl {
    async fn get_example(
        &self,
        component: &str,
        example_type: Option<&str>,
    ) -> Result<SourceDocument> {
        let example_type = example_type.unwrap_or(self.layout.default_example_type.as_str());
        let path = self.layout.example_path(component, example_type);

        match fs::read_to_string(&path).await {
            Ok(content) => Ok(SourceDocument::new(path, content)),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Example read failed");
                Err(Error::example_not_found(component, example_type, path))
            }
        }
    }
}
