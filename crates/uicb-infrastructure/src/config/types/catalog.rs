//! Catalog location configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uicb_domain::constants::{
    DEFAULT_COMPONENTS_DIR, DEFAULT_DOC_EXTENSION, DEFAULT_DOCS_DIR, DEFAULT_EXAMPLE_TYPE,
    DEFAULT_INDEX_FILE_STEM, DEFAULT_RULES_FILE, DEFAULT_SOURCE_EXTENSIONS,
};
use uicb_domain::error::Result;
use uicb_domain::value_objects::CatalogLayout;

use crate::error_ext::ErrorContext;

/// Catalog configuration
///
/// Relative directories resolve against `base_dir`; `base_dir` itself
/// resolves against the working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Project root that reported entry paths are relative to
    pub base_dir: PathBuf,

    /// Component root
    pub components_dir: PathBuf,

    /// Documentation tree root
    pub docs_dir: PathBuf,

    /// Rules document
    pub rules_file: PathBuf,

    /// Extensions that mark a file as component source, in priority order
    pub source_extensions: Vec<String>,

    /// Stem of the conventional entry file
    pub index_file_stem: String,

    /// Extension of documentation fragments
    pub doc_extension: String,

    /// Example category used when a request names none
    pub default_example_type: String,

    /// Report an unreadable component root as an error instead of an
    /// empty listing
    pub strict_scan: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            components_dir: PathBuf::from(DEFAULT_COMPONENTS_DIR),
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
            rules_file: PathBuf::from(DEFAULT_RULES_FILE),
            source_extensions: DEFAULT_SOURCE_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            index_file_stem: DEFAULT_INDEX_FILE_STEM.to_string(),
            doc_extension: DEFAULT_DOC_EXTENSION.to_string(),
            default_example_type: DEFAULT_EXAMPLE_TYPE.to_string(),
            strict_scan: false,
        }
    }
}

impl CatalogConfig {
    /// Resolve into the immutable layout handed to the services
    pub fn to_layout(&self) -> Result<CatalogLayout> {
        let base_dir = std::path::absolute(&self.base_dir).with_config_context(|| {
            format!("Cannot resolve base directory {}", self.base_dir.display())
        })?;

        let mut layout = CatalogLayout::new(&base_dir)
            .with_components_root(base_dir.join(&self.components_dir))
            .with_docs_root(base_dir.join(&self.docs_dir))
            .with_rules_file(base_dir.join(&self.rules_file))
            .with_source_extensions(self.source_extensions.iter().map(|e| normalize_extension(e)));
        layout.index_file_stem.clone_from(&self.index_file_stem);
        layout.doc_extension = normalize_extension(&self.doc_extension);
        layout.default_example_type.clone_from(&self.default_example_type);
        Ok(layout)
    }
}

/// Strip a leading dot so `.tsx` and `tsx` mean the same thing
pub fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_string()
}

