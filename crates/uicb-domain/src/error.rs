//! Error handling types

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Why a component lookup failed
///
/// Callers are not required to distinguish the two cases; both surface as
/// [`Error::ComponentNotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// No directory with the component's name exists under the component root
    MissingDirectory,
    /// The directory exists but holds no resolvable main source file
    MissingMainFile,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDirectory => f.write_str("no component directory"),
            Self::MissingMainFile => f.write_str("main component file not found"),
        }
    }
}

/// Main error type for the UI Components Browser
#[derive(Error, Debug)]
pub enum Error {
    /// The component root (or another listed directory) could not be read
    #[error("Cannot read directory {}: {source}", .path.display())]
    DirectoryAccess {
        /// Directory that failed to list
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Requested component has no directory or no main file
    #[error("Component \"{component}\" not found ({reason})")]
    ComponentNotFound {
        /// Name that was looked up
        component: String,
        /// Which resolution step failed
        reason: NotFoundReason,
    },

    /// The documentation fragment for a component/example pair does not resolve
    #[error("Example \"{example_type}\" not found for component \"{component}\" at {}", .path.display())]
    ExampleNotFound {
        /// Component name
        component: String,
        /// Example category that was requested
        example_type: String,
        /// Constructed documentation path
        path: PathBuf,
    },

    /// The fixed rules file is missing or unreadable
    #[error("Rules file not found at {}", .path.display())]
    RulesNotFound {
        /// Configured rules file path
        path: PathBuf,
    },

    /// An operation name outside the fixed tool set
    #[error("Unknown tool: {name}")]
    UnknownOperation {
        /// Name received from the caller
        name: String,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Catalog error creation methods
impl Error {
    /// Create a directory access error
    pub fn directory_access<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::DirectoryAccess {
            path: path.into(),
            source,
        }
    }

    /// Create a component-not-found error
    pub fn component_not_found<S: Into<String>>(component: S, reason: NotFoundReason) -> Self {
        Self::ComponentNotFound {
            component: component.into(),
            reason,
        }
    }

    /// Create an example-not-found error
    pub fn example_not_found<C, E, P>(component: C, example_type: E, path: P) -> Self
    where
        C: Into<String>,
        E: Into<String>,
        P: Into<PathBuf>,
    {
        Self::ExampleNotFound {
            component: component.into(),
            example_type: example_type.into(),
            path: path.into(),
        }
    }

    /// Create a rules-not-found error
    pub fn rules_not_found<P: Into<PathBuf>>(path: P) -> Self {
        Self::RulesNotFound { path: path.into() }
    }

    /// Create an unknown-operation error
    pub fn unknown_operation<S: Into<String>>(name: S) -> Self {
        Self::UnknownOperation { name: name.into() }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// I/O and configuration error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Short kind label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DirectoryAccess { .. } => "directory_access",
            Self::ComponentNotFound { .. } => "component_not_found",
            Self::ExampleNotFound { .. } => "example_not_found",
            Self::RulesNotFound { .. } => "rules_not_found",
            Self::UnknownOperation { .. } => "unknown_operation",
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::IoSimple { .. } | Self::Io { .. } => "io",
            Self::Json { .. } => "json",
            Self::Configuration { .. } => "configuration",
        }
    }
}
