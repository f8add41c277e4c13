//! Error types for paramdoc

use thiserror::Error;

/// Result type alias for paramdoc operations
pub type DocResult<T> = Result<T, DocError>;

/// Error type for schema loading and tree building
///
/// Unresolvable class references are not errors: traversal degrades to an
/// empty branch instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocError {
    /// A type expression could not be parsed
    #[error("invalid type expression '{input}': {reason}")]
    TypeSyntax { input: String, reason: String },

    /// Two classes were declared with the same name
    #[error("duplicate class definition: {0}")]
    DuplicateClass(String),

    /// The schema document is structurally invalid
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// A class was re-entered while it was still being expanded
    #[error("cyclic type detected: {}", path.join(" -> "))]
    CyclicType { path: Vec<String> },

    /// Expansion went deeper than the configured bound
    #[error("maximum expansion depth {max_depth} exceeded at {class}")]
    DepthExceeded { max_depth: usize, class: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl DocError {
    /// Returns a stable numeric code for the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            DocError::TypeSyntax { .. } => 1,
            DocError::DuplicateClass(_) => 2,
            DocError::InvalidSchema(_) => 3,
            DocError::CyclicType { .. } => 4,
            DocError::DepthExceeded { .. } => 5,
            DocError::ConfigError(_) => 6,
            DocError::SerializationError(_) => 7,
        }
    }

    pub(crate) fn type_syntax(input: &str, reason: impl Into<String>) -> Self {
        DocError::TypeSyntax {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for DocError {
    fn from(err: serde_json::Error) -> Self {
        DocError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
