//! Component Directory Index Use Case
//!
//! Scans one level below the component root. A subdirectory is a component
//! iff it directly contains a file with a recognized source extension.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};
use uicb_domain::error::{Error, Result};
use uicb_domain::value_objects::{CatalogLayout, ComponentEntry, ScanOutcome, SkipReason};

use super::fs_probe;
use crate::ports::ComponentIndexInterface;

/// Scan the component root and classify every entry
///
/// Fails with [`Error::DirectoryAccess`] only when the root itself cannot
/// be listed. Subdirectories that cannot be read are reported as
/// [`SkipReason::Unreadable`] and the scan continues. Outcomes keep the
/// order of the underlying directory listing.
pub async fn scan_components(layout: &CatalogLayout) -> Result<Vec<ScanOutcome>> {
    let root = &layout.components_root;
    let mut entries = fs::read_dir(root)
        .await
        .map_err(|e| Error::directory_access(root, e))?;

    let mut outcomes = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::directory_access(root, e))?
    {
        let name = entry.file_name().to_string_lossy().into_owned();
        outcomes.push(classify_entry(layout, &entry.path(), name).await);
    }

    Ok(outcomes)
}

async fn classify_entry(layout: &CatalogLayout, path: &Path, name: String) -> ScanOutcome {
    if !fs_probe::is_dir(path).await {
        return ScanOutcome::Skipped {
            name,
            reason: SkipReason::NotADirectory,
        };
    }

    match contains_source_file(layout, path).await {
        Ok(true) => ScanOutcome::Component(layout.entry_for(&name)),
        Ok(false) => ScanOutcome::Skipped {
            name,
            reason: SkipReason::NoSourceFiles,
        },
        Err(e) => ScanOutcome::Skipped {
            name,
            reason: SkipReason::Unreadable(e.to_string()),
        },
    }
}

async fn contains_source_file(layout: &CatalogLayout, dir: &Path) -> std::io::Result<bool> {
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        if layout.is_source_file(&entry.file_name().to_string_lossy())
            && fs_probe::is_file(&entry.path()).await
        {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Directory index over a [`CatalogLayout`]
pub struct ComponentIndexServiceImpl {
    layout: Arc<CatalogLayout>,
    strict: bool,
}

impl ComponentIndexServiceImpl {
    /// Create a lenient index: an unreadable root lists as empty
    pub fn new(layout: Arc<CatalogLayout>) -> Self {
        Self {
            layout,
            strict: false,
        }
    }

    /// Surface an unreadable root as [`Error::DirectoryAccess`] instead of
    /// an empty listing
    pub fn with_strict_scan(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[async_trait]
impl ComponentIndexInterface for ComponentIndexServiceImpl {
    async fn list_components(&self, category: Option<&str>) -> Result<Vec<ComponentEntry>> {
        let outcomes = match scan_components(&self.layout).await {
            Ok(outcomes) => outcomes,
            Err(e) if !self.strict => {
                warn!(error = %e, "Component root unreadable, listing no components");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let category = category.filter(|c| !c.is_empty());
        let components = outcomes
            .into_iter()
            .filter_map(|outcome| match outcome {
                ScanOutcome::Component(entry) => Some(entry),
                ScanOutcome::Skipped { name, reason } => {
                    debug!(entry = %name, %reason, "Skipping non-component entry");
                    None
                }
            })
            .filter(|entry| category.is_none_or(|c| entry.matches_category(c)))
            .collect::<Vec<_>>();

        debug!(
            count = components.len(),
            category = category.unwrap_or(""),
            "Listed components"
        );
        Ok(components)
    }
}
