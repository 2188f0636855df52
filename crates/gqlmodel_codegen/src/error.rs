//! Schema shape errors that abort generation.

use crate::render::UnwrapError;
use gqlmodel_schema::TypeKind;
use thiserror::Error;

/// A schema violates an invariant the generator relies on.
///
/// Every variant names the offending type. Generation stops at the first
/// error and produces no output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("type `{type_name}` ({kind}) declares no fields")]
    MissingFields { type_name: String, kind: TypeKind },

    #[error("input type `{type_name}` declares no input fields")]
    MissingInputFields { type_name: String },

    #[error("enum `{type_name}` declares no values")]
    MissingEnumValues { type_name: String },

    #[error("type `{type_name}` has unsupported kind {kind}")]
    UnsupportedKind { type_name: String, kind: TypeKind },

    #[error("field `{type_name}.{field_name}` has an unresolvable type: {reason}")]
    UnresolvedType {
        type_name: String,
        field_name: String,
        #[source]
        reason: UnwrapError,
    },

    #[error("interface #{index} of `{type_name}` has no name")]
    UnresolvedInterface { type_name: String, index: usize },

    #[error("schema type #{index} has an empty name")]
    EmptyTypeName { index: usize },

    #[error("type `{type_name}` is declared more than once")]
    DuplicateType { type_name: String },
}

impl GenerateError {
    /// Name of the type the error is about, when it has one.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::MissingFields { type_name, .. }
            | Self::MissingInputFields { type_name }
            | Self::MissingEnumValues { type_name }
            | Self::UnsupportedKind { type_name, .. }
            | Self::UnresolvedType { type_name, .. }
            | Self::UnresolvedInterface { type_name, .. }
            | Self::DuplicateType { type_name } => Some(type_name),
            Self::EmptyTypeName { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_type() {
        let err = GenerateError::UnsupportedKind {
            type_name: "SearchResult".into(),
            kind: TypeKind::Union,
        };
        assert_eq!(err.to_string(), "type `SearchResult` has unsupported kind UNION");
        assert_eq!(err.type_name(), Some("SearchResult"));

        let err = GenerateError::UnresolvedType {
            type_name: "Page".into(),
            field_name: "items".into(),
            reason: UnwrapError::MissingOfType(TypeKind::List),
        };
        assert_eq!(
            err.to_string(),
            "field `Page.items` has an unresolvable type: LIST wrapper has no `ofType`"
        );
    }

    #[test]
    fn test_empty_name_has_no_type() {
        assert_eq!(GenerateError::EmptyTypeName { index: 3 }.type_name(), None);
    }
}
