//! Introspection type definitions.
//!
//! This module contains the data structures representing a GraphQL type
//! system as returned by introspection: named types, their fields and enum
//! values, and the recursive type references that tie them together.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Complete introspected schema.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Name of the query root type.
    pub query_type: Option<String>,
    /// Name of the mutation root type.
    pub mutation_type: Option<String>,
    /// Name of the subscription root type.
    pub subscription_type: Option<String>,
    /// Type definitions in document order.
    pub types: Vec<TypeDescriptor>,
    /// Type lookup map (built during parsing).
    type_map: HashMap<String, usize>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type definition to the schema.
    pub fn add_type(&mut self, descriptor: TypeDescriptor) {
        let index = self.types.len();
        self.type_map.insert(descriptor.name.clone(), index);
        self.types.push(descriptor);
    }

    /// Looks up a type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeDescriptor> {
        self.type_map.get(name).map(|&idx| &self.types[idx])
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.type_map.contains_key(name)
    }

    /// Returns the number of types in the schema.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the schema has no types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Discriminant of a type descriptor or type reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    /// Scalar leaf type.
    Scalar,
    /// Object output type.
    Object,
    /// Interface output type.
    Interface,
    /// Union output type.
    Union,
    /// Enumeration type.
    Enum,
    /// Input object (record) type.
    InputObject,
    /// List wrapper.
    List,
    /// Non-null wrapper.
    NonNull,
    /// Any kind this crate does not recognize.
    #[serde(other)]
    Unknown,
}

impl Kind {
    /// Returns the wire spelling of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Returns true for the two wrapper kinds.
    #[must_use]
    pub const fn is_wrapper(&self) -> bool {
        matches!(self, Self::List | Self::NonNull)
    }

    /// Returns true for kinds that may appear as the leaf of an input field.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::Scalar | Self::Enum | Self::InputObject)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A possibly wrapped reference to a named type.
///
/// Each wrapper owns exactly one child; the innermost node is always a
/// [`TypeRef::Named`] leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// `LIST` wrapper.
    List(Box<TypeRef>),
    /// `NON_NULL` wrapper.
    NonNull(Box<TypeRef>),
    /// Named leaf.
    Named {
        /// Kind of the referenced type.
        kind: Kind,
        /// Name of the referenced type.
        name: String,
    },
}

impl TypeRef {
    /// Creates a named leaf reference.
    #[must_use]
    pub fn named(kind: Kind, name: impl Into<String>) -> Self {
        Self::Named {
            kind,
            name: name.into(),
        }
    }

    /// Creates a scalar leaf reference.
    #[must_use]
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::named(Kind::Scalar, name)
    }

    /// Wraps a reference in `LIST`.
    #[must_use]
    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wraps a reference in `NON_NULL`.
    #[must_use]
    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// Returns true if the outermost wrapper is `NON_NULL`.
    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Returns the kind and name of the innermost leaf.
    #[must_use]
    pub fn leaf(&self) -> (Kind, &str) {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.leaf(),
            Self::Named { kind, name } => (*kind, name),
        }
    }

    /// Returns the number of wrappers around the leaf.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::List(inner) | Self::NonNull(inner) => 1 + inner.depth(),
            Self::Named { .. } => 0,
        }
    }
}

impl fmt::Display for TypeRef {
    /// Formats the reference in GraphQL SDL notation (`[Int!]!`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
            Self::Named { name, .. } => f.write_str(name),
        }
    }
}

/// A named type from the introspection result.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Type kind.
    pub kind: Kind,
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Output fields (objects and interfaces).
    pub fields: Vec<Field>,
    /// Input fields (input objects).
    pub input_fields: Vec<Field>,
    /// Enum values (enums).
    pub enum_values: Vec<EnumValue>,
}

impl TypeDescriptor {
    /// Creates a descriptor with no fields or values.
    #[must_use]
    pub fn new(kind: Kind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: None,
            fields: Vec::new(),
            input_fields: Vec::new(),
            enum_values: Vec::new(),
        }
    }

    /// Creates an enum descriptor from value names.
    #[must_use]
    pub fn enumeration(name: impl Into<String>, values: &[&str]) -> Self {
        let mut descriptor = Self::new(Kind::Enum, name);
        descriptor.enum_values = values.iter().map(|v| EnumValue::new(*v)).collect();
        descriptor
    }

    /// Creates an input object descriptor from its fields.
    #[must_use]
    pub fn input_object(name: impl Into<String>, fields: Vec<Field>) -> Self {
        let mut descriptor = Self::new(Kind::InputObject, name);
        descriptor.input_fields = fields;
        descriptor
    }
}

/// A field of an object or input object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Wire name of the field.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Field type.
    pub type_ref: TypeRef,
}

impl Field {
    /// Creates a field without a description.
    #[must_use]
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            type_ref,
        }
    }
}

/// A value of an enum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Wire name of the value.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Whether the value is deprecated.
    pub is_deprecated: bool,
}

impl EnumValue {
    /// Creates a non-deprecated value without description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_deprecated: false,
        }
    }
}
