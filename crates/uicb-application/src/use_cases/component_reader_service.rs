//! Component Detail Reader Use Case

use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use uicb_domain::error::{Error, NotFoundReason, Result};
use uicb_domain::value_objects::{CatalogLayout, ComponentSource, SourceDocument};

use super::fs_probe;
use crate::ports::ComponentReaderInterface;

/// Reads a component's main file from the component root
pub struct ComponentReaderServiceImpl {
    layout: Arc<CatalogLayout>,
}

impl ComponentReaderServiceImpl {
    /// Create a new reader
    pub fn new(layout: Arc<CatalogLayout>) -> Self {
        Self { layout }
    }
}

#[async_trait]
impl ComponentReaderInterface for ComponentReaderServiceImpl {
    async fn read_component(&self, name: &str) -> Result<ComponentSource> {
        let dir = self.layout.component_dir(name);
        if !fs_probe::is_dir(&dir).await {
            return Err(Error::component_not_found(
                name,
                NotFoundReason::MissingDirectory,
            ));
        }

        for candidate in self.layout.main_file_candidates(name) {
            if !fs_probe::is_file(&candidate).await {
                continue;
            }
            let bytes = fs::read(&candidate).await.map_err(|e| {
                Error::io_with_source(format!("Failed to read {}", candidate.display()), e)
            })?;
            // Invalid UTF-8 sequences become U+FFFD; the rest is untouched
            let content = String::from_utf8_lossy(&bytes).into_owned();
            return Ok(ComponentSource {
                name: name.to_string(),
                document: SourceDocument::new(candidate, content),
            });
        }

        Err(Error::component_not_found(
            name,
            NotFoundReason::MissingMainFile,
        ))
    }
}
