//! Static Rules Fetcher Use Case

use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;
use uicb_domain::error::{Error, Result};
use uicb_domain::value_objects::{CatalogLayout, SourceDocument};

use crate::ports::RulesServiceInterface;

/// Reads the configured rules file
pub struct RulesServiceImpl {
    layout: Arc<CatalogLayout>,
}

impl RulesServiceImpl {
    /// Create a new rules fetcher
    pub fn new(layout: Arc<CatalogLayout>) -> Self {
        Self { layout }
    }
}

#[async_trait]
impl RulesServiceInterface for RulesServiceImpl {
    async fn get_rules(&self) -> Result<SourceDocument> {
        let path = &self.layout.rules_file;
        match fs::read_to_string(path).await {
            Ok(content) => Ok(SourceDocument::new(path.clone(), content)),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Rules read failed");
                Err(Error::rules_not_found(path.clone()))
            }
        }
    }
}
