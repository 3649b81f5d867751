//! Resolved catalog layout
//!
//! The immutable description of where components, documentation and rules
//! live on disk, and which file names mark component source. Built once at
//! startup and shared by every service.

use std::path::{Component, Path, PathBuf};

use crate::constants::{
    DEFAULT_COMPONENTS_DIR, DEFAULT_DOC_EXTENSION, DEFAULT_DOCS_DIR, DEFAULT_EXAMPLE_TYPE,
    DEFAULT_INDEX_FILE_STEM, DEFAULT_RULES_FILE, DEFAULT_SOURCE_EXTENSIONS,
};
use crate::value_objects::ComponentEntry;

/// Filesystem layout of the component catalog
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use uicb_domain::value_objects::CatalogLayout;
///
/// let layout = CatalogLayout::new("/srv/ui");
///
/// assert_eq!(
///     layout.example_path("Button", "Advanced"),
///     Path::new("/srv/ui/demo/src/assets/markdown/ui-components/Button/Advanced.md"),
/// );
/// assert!(layout.is_source_file("Button.tsx"));
/// assert!(!layout.is_source_file("helpers.ts"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLayout {
    /// Directory entry paths are reported relative to
    pub base_dir: PathBuf,

    /// Directory whose immediate subdirectories are components
    pub components_root: PathBuf,

    /// Root of the `<component>/<example>.<ext>` documentation tree
    pub docs_root: PathBuf,

    /// The rules document
    pub rules_file: PathBuf,

    /// Recognized source extensions, without leading dot, in priority order
    pub source_extensions: Vec<String>,

    /// Stem of the fallback entry file (`index` → `index.tsx`)
    pub index_file_stem: String,

    /// Extension of documentation fragments, without leading dot
    pub doc_extension: String,

    /// Example category used when a request names none
    pub default_example_type: String,
}

impl CatalogLayout {
    /// Layout with the conventional directory structure under `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            components_root: base_dir.join(DEFAULT_COMPONENTS_DIR),
            docs_root: base_dir.join(DEFAULT_DOCS_DIR),
            rules_file: base_dir.join(DEFAULT_RULES_FILE),
            source_extensions: DEFAULT_SOURCE_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            index_file_stem: DEFAULT_INDEX_FILE_STEM.to_string(),
            doc_extension: DEFAULT_DOC_EXTENSION.to_string(),
            default_example_type: DEFAULT_EXAMPLE_TYPE.to_string(),
            base_dir,
        }
    }

    /// Override the component root
    pub fn with_components_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.components_root = root.into();
        self
    }

    /// Override the documentation root
    pub fn with_docs_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.docs_root = root.into();
        self
    }

    /// Override the rules file
    pub fn with_rules_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.rules_file = path.into();
        self
    }

    /// Override the recognized source extensions
    pub fn with_source_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Directory a component of this name would live in
    pub fn component_dir(&self, name: &str) -> PathBuf {
        self.components_root.join(name)
    }

    /// Main-file candidates in resolution order
    ///
    /// `<name>.<ext>` for every source extension first, then
    /// `<index-stem>.<ext>` for every source extension.
    pub fn main_file_candidates(&self, name: &str) -> Vec<PathBuf> {
        let dir = self.component_dir(name);
        [name, self.index_file_stem.as_str()]
            .iter()
            .flat_map(|stem| {
                self.source_extensions
                    .iter()
                    .map(move |ext| format!("{stem}.{ext}"))
            })
            .map(|file_name| dir.join(file_name))
            .collect()
    }

    /// Documentation path for a component/example pair
    pub fn example_path(&self, component: &str, example_type: &str) -> PathBuf {
        self.docs_root
            .join(component)
            .join(format!("{example_type}.{}", self.doc_extension))
    }

    /// Whether a file name ends in `.<ext>` for a recognized source
    /// extension
    ///
    /// Matching is on the suffix, so a bare `.tsx` counts.
    pub fn is_source_file(&self, file_name: &str) -> bool {
        self.source_extensions.iter().any(|ext| {
            file_name
                .strip_suffix(ext.as_str())
                .is_some_and(|stem| stem.ends_with('.'))
        })
    }

    /// Path as reported to callers: relative to `base_dir`, `/`-separated,
    /// with a leading `/`
    ///
    /// Paths outside `base_dir` are reported in full.
    pub fn display_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.base_dir) {
            Ok(relative) => {
                let segments: Vec<_> = relative
                    .components()
                    .filter_map(|component| match component {
                        Component::Normal(segment) => Some(segment.to_string_lossy()),
                        _ => None,
                    })
                    .collect();
                format!("/{}", segments.join("/"))
            }
            Err(_) => path.display().to_string(),
        }
    }

    /// Entry describing the component directory `name`
    pub fn entry_for(&self, name: &str) -> ComponentEntry {
        ComponentEntry::new(name, self.display_path(&self.component_dir(name)))
    }
}
