//! Error types for path-addressed YAML editing.

use std::fmt;

/// Errors that can occur while editing a YAML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Parse error reported by the underlying YAML reader
    Parse(String),
    /// Emit error reported by the underlying YAML writer
    Emit(String),
    /// The dotted path was empty
    EmptyPath,
    /// The document has no root node
    EmptyDocument,
    /// An intermediate path step resolved to something other than a mapping
    ExpectedMapping(String),
    /// No mapping key matched a path segment
    PathNotFound(String),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::Parse(msg) => write!(f, "Parse error: {}", msg),
            EditError::Emit(msg) => write!(f, "Emit error: {}", msg),
            EditError::EmptyPath => write!(f, "Empty path"),
            EditError::EmptyDocument => write!(f, "Document has no content"),
            EditError::ExpectedMapping(path) => {
                write!(f, "Expected a mapping while resolving '{}'", path)
            }
            EditError::PathNotFound(path) => write!(f, "Path not found: '{}'", path),
        }
    }
}

impl std::error::Error for EditError {}

impl From<yaml_rust2::ScanError> for EditError {
    fn from(err: yaml_rust2::ScanError) -> Self {
        EditError::Parse(err.to_string())
    }
}

impl From<yaml_rust2::EmitError> for EditError {
    fn from(err: yaml_rust2::EmitError) -> Self {
        EditError::Emit(err.to_string())
    }
}

/// Result type for editing operations
pub type EditResult<T> = Result<T, EditError>;
