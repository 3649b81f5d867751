//! Component catalog value objects
//!
//! Request-scoped projections of the component tree. None of these
//! outlive the response they are built for.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Kind tag carried by every listed entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// A directory holding at least one component source file
    #[default]
    Component,
}

/// One component found by scanning the component root
///
/// # Example
///
/// ```
/// use uicb_domain::value_objects::ComponentEntry;
///
/// let entry = ComponentEntry::new("Button", "/demo/src/components/ui/Button");
/// let json = serde_json::to_value(&entry).unwrap();
///
/// assert_eq!(json["name"], "Button");
/// assert_eq!(json["type"], "component");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntry {
    /// Directory name, which is also the component name
    pub name: String,

    /// Directory path relative to the catalog base directory
    pub path: String,

    /// Always [`ComponentKind::Component`]
    #[serde(rename = "type")]
    pub kind: ComponentKind,
}

impl ComponentEntry {
    /// Create a new component entry
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: ComponentKind::Component,
        }
    }

    /// Case-insensitive substring match of `category` against the entry path
    pub fn matches_category(&self, category: &str) -> bool {
        self.path
            .to_lowercase()
            .contains(&category.to_lowercase())
    }
}

/// Raw text of exactly one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Path the content was read from
    pub path: PathBuf,

    /// File content, unmodified
    pub content: String,
}

impl SourceDocument {
    /// Create a new source document
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// A component's resolved main file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSource {
    /// Component name as requested
    pub name: String,

    /// The main file that was read
    pub document: SourceDocument,
}

/// Why a directory-listing entry was not reported as a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry is a plain file (or something other than a directory)
    NotADirectory,
    /// The directory holds no file with a recognized source extension
    NoSourceFiles,
    /// The directory could not be listed
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotADirectory => f.write_str("not a directory"),
            Self::NoSourceFiles => f.write_str("no recognized source files"),
            Self::Unreadable(message) => write!(f, "unreadable: {message}"),
        }
    }
}

/// Per-entry result of scanning the component root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The entry is a component
    Component(ComponentEntry),
    /// The entry was skipped
    Skipped {
        /// File or directory name of the skipped entry
        name: String,
        /// Why it was skipped
        reason: SkipReason,
    },
}

impl ScanOutcome {
    /// The component entry, if this outcome is one
    pub fn into_component(self) -> Option<ComponentEntry> {
        match self {
            Self::Component(entry) => Some(entry),
            Self::Skipped { .. } => None,
        }
    }
}
