//! Error types for introspection parsing.

use thiserror::Error;

/// Error type for introspection parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error.
    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document carries no `__schema` object.
    #[error("introspection document has no __schema object")]
    MissingSchema,

    /// The server answered with GraphQL errors instead of data.
    #[error("introspection query returned errors: {}", messages.join("; "))]
    GraphQl {
        /// Error messages reported by the server.
        messages: Vec<String>,
    },

    /// A type reference that is neither a wrapper nor a named leaf.
    #[error("malformed type reference in field '{field}' of type '{type_name}': {reason}")]
    MalformedTypeRef {
        /// Owning type name.
        type_name: String,
        /// Field name.
        field: String,
        /// What is wrong with the reference.
        reason: String,
    },

    /// Two types share the same name.
    #[error("duplicate type definition: '{name}'")]
    DuplicateType {
        /// Name of the duplicate.
        name: String,
    },
}

impl ParseError {
    /// Creates a malformed type reference error.
    pub fn malformed(
        type_name: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedTypeRef {
            type_name: type_name.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a duplicate type error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateType { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display_names_type_and_field() {
        let err = ParseError::malformed("UserInput", "email", "LIST without ofType");
        let msg = err.to_string();
        assert!(msg.contains("UserInput"));
        assert!(msg.contains("email"));
        assert!(msg.contains("LIST without ofType"));
    }

    #[test]
    fn test_graphql_errors_joined() {
        let err = ParseError::GraphQl {
            messages: vec!["unauthorized".to_string(), "try again".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "introspection query returned errors: unauthorized; try again"
        );
    }
}
