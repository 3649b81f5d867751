//! Composition Root
//!
//! ```text
//! AppConfig → CatalogLayout (Arc) → use case services (Arc<dyn …>)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(AppConfig::default())?;
//! let index = context.component_index();
//! let components = index.list_components(None).await?;
//! ```

use std::sync::Arc;

use tracing::info;
use uicb_application::{
    ComponentIndexInterface, ComponentIndexServiceImpl, ComponentReaderInterface,
    ComponentReaderServiceImpl, ExampleServiceImpl, ExampleServiceInterface,
    RulesServiceImpl, RulesServiceInterface,
};
use uicb_domain::error::Result;
use uicb_domain::value_objects::CatalogLayout;

use crate::config::AppConfig;

/// Application context holding the configuration and catalog services
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    layout: Arc<CatalogLayout>,
    component_index: Arc<dyn ComponentIndexInterface>,
    component_reader: Arc<dyn ComponentReaderInterface>,
    example_service: Arc<dyn ExampleServiceInterface>,
    rules_service: Arc<dyn RulesServiceInterface>,
}

impl AppContext {
    /// Resolved catalog layout shared by every service
    pub fn layout(&self) -> Arc<CatalogLayout> {
        Arc::clone(&self.layout)
    }

    /// Component directory index
    pub fn component_index(&self) -> Arc<dyn ComponentIndexInterface> {
        Arc::clone(&self.component_index)
    }

    /// Component detail reader
    pub fn component_reader(&self) -> Arc<dyn ComponentReaderInterface> {
        Arc::clone(&self.component_reader)
    }

    /// Example fetcher
    pub fn example_service(&self) -> Arc<dyn ExampleServiceInterface> {
        Arc::clone(&self.example_service)
    }

    /// Rules fetcher
    pub fn rules_service(&self) -> Arc<dyn RulesServiceInterface> {
        Arc::clone(&self.rules_service)
    }
}

/// Build the application context from configuration
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let layout = Arc::new(config.catalog.to_layout()?);

    info!(
        base_dir = %layout.base_dir.display(),
        components_root = %layout.components_root.display(),
        docs_root = %layout.docs_root.display(),
        rules_file = %layout.rules_file.display(),
        strict_scan = config.catalog.strict_scan,
        "Catalog layout resolved"
    );

    let component_index = Arc::new(
        ComponentIndexServiceImpl::new(Arc::clone(&layout))
            .with_strict_scan(config.catalog.strict_scan),
    );
    let component_reader = Arc::new(ComponentReaderServiceImpl::new(Arc::clone(&layout)));
    let example_service = Arc::new(ExampleServiceImpl::new(Arc::clone(&layout)));
    let rules_service = Arc::new(RulesServiceImpl::new(Arc::clone(&layout)));

    Ok(AppContext {
        config: Arc::new(config),
        layout,
        component_index,
        component_reader,
        example_service,
        rules_service,
    })
}
