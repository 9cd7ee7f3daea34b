//! Introspection document parser.
//!
//! This module decodes the JSON result of an introspection query into the
//! typed [`Schema`] representation. Wire type references are converted into
//! the recursive [`TypeRef`] sum type here, so every later stage can rely on
//! wrappers always having a child and leaves always having a name.

use crate::error::ParseError;
use crate::types::{EnumValue, Field, Kind, Schema, TypeDescriptor, TypeRef};
use serde::Deserialize;

/// Parses an introspection document from a JSON string.
///
/// Both the full response envelope (`{"data": {"__schema": ...}}`) and a bare
/// `{"__schema": ...}` object are accepted.
///
/// # Arguments
/// * `json` - Introspection document content
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed, the server reported errors
/// without data, or a type reference is neither a wrapper nor a named leaf.
pub fn parse_introspection(json: &str) -> Result<Schema, ParseError> {
    let envelope: Envelope = serde_json::from_str(json)?;

    let messages: Vec<String> = envelope.errors.into_iter().map(|e| e.message).collect();
    let raw = match (envelope.data, envelope.schema) {
        (Some(DataRoot { schema: Some(raw) }), _) | (_, Some(raw)) => raw,
        _ if !messages.is_empty() => return Err(ParseError::GraphQl { messages }),
        _ => return Err(ParseError::MissingSchema),
    };
    if !messages.is_empty() {
        tracing::warn!("introspection returned partial errors: {}", messages.join("; "));
    }

    let schema = build_schema(raw)?;
    tracing::debug!("parsed introspection schema with {} types", schema.len());
    Ok(schema)
}

/// Converts the raw wire schema into the typed representation.
fn build_schema(raw: RawSchema) -> Result<Schema, ParseError> {
    let mut schema = Schema::new();
    schema.query_type = raw.query_type.and_then(|t| t.name);
    schema.mutation_type = raw.mutation_type.and_then(|t| t.name);
    schema.subscription_type = raw.subscription_type.and_then(|t| t.name);

    for raw_type in raw.types {
        let descriptor = build_descriptor(raw_type)?;
        if schema.has_type(&descriptor.name) {
            return Err(ParseError::duplicate(descriptor.name));
        }
        schema.add_type(descriptor);
    }

    Ok(schema)
}

/// Converts one raw named type.
fn build_descriptor(raw: RawType) -> Result<TypeDescriptor, ParseError> {
    let name = raw.name;

    let fields = raw
        .fields
        .unwrap_or_default()
        .into_iter()
        .map(|f| build_field(&name, f))
        .collect::<Result<Vec<_>, _>>()?;

    let input_fields = raw
        .input_fields
        .unwrap_or_default()
        .into_iter()
        .map(|f| build_field(&name, f))
        .collect::<Result<Vec<_>, _>>()?;

    let enum_values = raw
        .enum_values
        .unwrap_or_default()
        .into_iter()
        .map(|v| EnumValue {
            name: v.name,
            description: v.description,
            is_deprecated: v.is_deprecated,
        })
        .collect();

    Ok(TypeDescriptor {
        kind: raw.kind,
        name,
        description: raw.description,
        fields,
        input_fields,
        enum_values,
    })
}

fn build_field(type_name: &str, raw: RawField) -> Result<Field, ParseError> {
    let type_ref = build_type_ref(type_name, &raw.name, raw.type_ref)?;
    Ok(Field {
        name: raw.name,
        description: raw.description,
        type_ref,
    })
}

/// Converts a raw `{kind, name, ofType}` reference into a [`TypeRef`].
///
/// `type_name` and `field` only feed the error message.
fn build_type_ref(type_name: &str, field: &str, raw: RawTypeRef) -> Result<TypeRef, ParseError> {
    match raw.kind {
        Kind::List | Kind::NonNull => {
            let inner = raw.of_type.ok_or_else(|| {
                ParseError::malformed(type_name, field, format!("{} without ofType", raw.kind))
            })?;
            let inner = build_type_ref(type_name, field, *inner)?;
            Ok(if raw.kind == Kind::List {
                TypeRef::list(inner)
            } else {
                TypeRef::non_null(inner)
            })
        }
        Kind::Unknown => Err(ParseError::malformed(
            type_name,
            field,
            "unrecognized type kind",
        )),
        kind => {
            let name = raw.name.ok_or_else(|| {
                ParseError::malformed(type_name, field, format!("{kind} reference without name"))
            })?;
            Ok(TypeRef::named(kind, name))
        }
    }
}

#[derive(Deserialize)]
struct Envelope {
    data: Option<DataRoot>,
    #[serde(default)]
    errors: Vec<RawError>,
    #[serde(rename = "__schema")]
    schema: Option<RawSchema>,
}

#[derive(Deserialize)]
struct DataRoot {
    #[serde(rename = "__schema")]
    schema: Option<RawSchema>,
}

#[derive(Deserialize)]
struct RawError {
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchema {
    query_type: Option<RawNamedRef>,
    mutation_type: Option<RawNamedRef>,
    subscription_type: Option<RawNamedRef>,
    types: Vec<RawType>,
}

#[derive(Deserialize)]
struct RawNamedRef {
    name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawType {
    kind: Kind,
    name: String,
    description: Option<String>,
    fields: Option<Vec<RawField>>,
    input_fields: Option<Vec<RawField>>,
    enum_values: Option<Vec<RawEnumValue>>,
}

#[derive(Deserialize)]
struct RawField {
    name: String,
    description: Option<String>,
    #[serde(rename = "type")]
    type_ref: RawTypeRef,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnumValue {
    name: String,
    description: Option<String>,
    #[serde(default)]
    is_deprecated: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTypeRef {
    kind: Kind,
    name: Option<String>,
    of_type: Option<Box<RawTypeRef>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = r#"{
        "data": {
            "__schema": {
                "queryType": { "name": "Query" },
                "mutationType": { "name": "Mutation" },
                "subscriptionType": null,
                "types": [
                    { "kind": "OBJECT", "name": "Query", "fields": [
                        { "name": "viewer", "args": [], "type": { "kind": "OBJECT", "name": "User", "ofType": null } }
                    ], "inputFields": null, "enumValues": null },
                    { "kind": "ENUM", "name": "Color", "fields": null, "inputFields": null, "enumValues": [
                        { "name": "RED", "isDeprecated": false },
                        { "name": "GREEN", "isDeprecated": true, "deprecationReason": "gone" }
                    ] },
                    { "kind": "INPUT_OBJECT", "name": "PaintInput", "fields": null, "inputFields": [
                        { "name": "color", "type": { "kind": "NON_NULL", "name": null,
                            "ofType": { "kind": "ENUM", "name": "Color", "ofType": null } }, "defaultValue": null },
                        { "name": "layers", "type": { "kind": "LIST", "name": null,
                            "ofType": { "kind": "SCALAR", "name": "Int", "ofType": null } }, "defaultValue": null }
                    ], "enumValues": null }
                ],
                "directives": [ { "name": "skip", "locations": ["FIELD"], "args": [] } ]
            }
        }
    }"#;

    #[test]
    fn test_parse_envelope() {
        let schema = parse_introspection(SIMPLE).expect("Failed to parse");

        assert_eq!(schema.query_type.as_deref(), Some("Query"));
        assert_eq!(schema.mutation_type.as_deref(), Some("Mutation"));
        assert_eq!(schema.subscription_type, None);
        assert_eq!(schema.len(), 3);

        let color = schema.get_type("Color").unwrap();
        assert_eq!(color.kind, Kind::Enum);
        assert_eq!(color.enum_values[0].name, "RED");
        assert!(color.enum_values[1].is_deprecated);

        let paint = schema.get_type("PaintInput").unwrap();
        assert_eq!(
            paint.input_fields[0].type_ref,
            TypeRef::non_null(TypeRef::named(Kind::Enum, "Color"))
        );
        assert_eq!(
            paint.input_fields[1].type_ref,
            TypeRef::list(TypeRef::scalar("Int"))
        );
    }

    #[test]
    fn test_parse_bare_schema() {
        let json = r#"{ "__schema": { "types": [ { "kind": "SCALAR", "name": "String" } ] } }"#;
        let schema = parse_introspection(json).expect("Failed to parse");
        assert!(schema.has_type("String"));
        assert_eq!(schema.query_type, None);
    }

    #[test]
    fn test_parse_missing_schema() {
        let result = parse_introspection(r#"{ "data": {} }"#);
        assert!(matches!(result, Err(ParseError::MissingSchema)));
    }

    #[test]
    fn test_parse_graphql_errors() {
        let json = r#"{ "data": null, "errors": [ { "message": "not authorized" } ] }"#;
        match parse_introspection(json) {
            Err(ParseError::GraphQl { messages }) => assert_eq!(messages, vec!["not authorized"]),
            other => panic!("expected GraphQl error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_introspection("{ not json");
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_wrapper_without_of_type() {
        let json = r#"{ "__schema": { "types": [
            { "kind": "INPUT_OBJECT", "name": "BrokenInput", "inputFields": [
                { "name": "tags", "type": { "kind": "LIST", "name": null, "ofType": null } }
            ] }
        ] } }"#;
        match parse_introspection(json) {
            Err(ParseError::MalformedTypeRef {
                type_name, field, ..
            }) => {
                assert_eq!(type_name, "BrokenInput");
                assert_eq!(field, "tags");
            }
            other => panic!("expected MalformedTypeRef, got {other:?}"),
        }
    }

    #[test]
    fn test_leaf_without_name() {
        let json = r#"{ "__schema": { "types": [
            { "kind": "INPUT_OBJECT", "name": "BrokenInput", "inputFields": [
                { "name": "id", "type": { "kind": "SCALAR", "name": null } }
            ] }
        ] } }"#;
        let result = parse_introspection(json);
        assert!(matches!(result, Err(ParseError::MalformedTypeRef { .. })));
    }

    #[test]
    fn test_unknown_kind_in_reference() {
        let json = r#"{ "__schema": { "types": [
            { "kind": "INPUT_OBJECT", "name": "BrokenInput", "inputFields": [
                { "name": "id", "type": { "kind": "MAYBE", "name": "ID" } }
            ] }
        ] } }"#;
        let result = parse_introspection(json);
        assert!(matches!(result, Err(ParseError::MalformedTypeRef { .. })));
    }

    #[test]
    fn test_duplicate_type_names() {
        let json = r#"{ "__schema": { "types": [
            { "kind": "SCALAR", "name": "Date" },
            { "kind": "SCALAR", "name": "Date" }
        ] } }"#;
        let result = parse_introspection(json);
        assert!(matches!(result, Err(ParseError::DuplicateType { name }) if name == "Date"));
    }

    #[test]
    fn test_deep_wrapping_survives() {
        // [[[Int!]!]!]! is seven wrappers deep.
        let json = r#"{ "__schema": { "types": [
            { "kind": "INPUT_OBJECT", "name": "Grid", "inputFields": [
                { "name": "cells", "type":
                    { "kind": "NON_NULL", "ofType":
                    { "kind": "LIST", "ofType":
                    { "kind": "NON_NULL", "ofType":
                    { "kind": "LIST", "ofType":
                    { "kind": "NON_NULL", "ofType":
                    { "kind": "LIST", "ofType":
                    { "kind": "NON_NULL", "ofType":
                    { "kind": "SCALAR", "name": "Int" } } } } } } } } }
            ] }
        ] } }"#;
        let schema = parse_introspection(json).expect("Failed to parse");
        let cells = &schema.get_type("Grid").unwrap().input_fields[0].type_ref;
        assert_eq!(cells.depth(), 7);
        assert_eq!(cells.to_string(), "[[[Int!]!]!]!");
    }
}
