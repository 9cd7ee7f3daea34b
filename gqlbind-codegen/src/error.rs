//! Error types for code generation.

use gqlbind_schema::Kind;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Introspection parse error.
    #[error("introspection parse error: {0}")]
    Parse(#[from] gqlbind_schema::ParseError),

    /// An input field whose type cannot be represented in an input record.
    #[error("unsupported {kind} type '{type_name}' in input field '{owner}.{field}'")]
    UnsupportedFieldType {
        /// Input record name.
        owner: String,
        /// Field name.
        field: String,
        /// Referenced type name.
        type_name: String,
        /// Kind of the referenced type.
        kind: Kind,
    },

    /// Two wire names of one declaration normalize to the same identifier.
    #[error("'{first}' and '{second}' in '{owner}' both map to identifier '{identifier}'")]
    NameCollision {
        /// Enum or input record name.
        owner: String,
        /// The shared Rust identifier.
        identifier: String,
        /// Wire name seen first.
        first: String,
        /// Wire name that collided with it.
        second: String,
    },

    /// Internal generator defect: the resolver met a state that a
    /// well-formed schema cannot produce.
    #[error("internal invariant violated: {message}")]
    InvariantViolation {
        /// Error message.
        message: String,
    },

    /// Failed to write a generated file.
    #[error("failed to write '{path}': {source}")]
    Write {
        /// Destination path.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodegenError {
    /// Creates a name collision error.
    pub fn collision(
        owner: impl Into<String>,
        identifier: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::NameCollision {
            owner: owner.into(),
            identifier: identifier.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Creates an invariant violation error with the given message.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }

    /// Returns true if the error is a defect in the generator itself rather
    /// than a problem with its input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}
