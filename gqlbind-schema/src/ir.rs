//! Intermediate representation for code generation.
//!
//! This module selects the declarations that get emitted from a parsed
//! schema: enums, input objects and the scalars they may reference, minus
//! the introspection meta-types, sorted by name so regenerated output is
//! stable.

use crate::types::{EnumValue, Field, Kind, Schema};

/// Name prefix reserved for the introspection meta-schema.
pub const INTERNAL_PREFIX: &str = "__";

/// Declarations selected for emission, each list sorted by name.
#[derive(Debug, Clone, Default)]
pub struct Declarations {
    /// Enum declarations.
    pub enums: Vec<EnumDecl>,
    /// Input record declarations.
    pub inputs: Vec<InputDecl>,
    /// Scalar declarations, built-in scalars included.
    pub scalars: Vec<ScalarDecl>,
}

impl Declarations {
    /// Returns the names of all input records, in emission order.
    #[must_use]
    pub fn input_names(&self) -> Vec<&str> {
        self.inputs.iter().map(|i| i.name.as_str()).collect()
    }

    /// Returns true if there is nothing to emit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enums.is_empty() && self.inputs.is_empty()
    }
}

/// A scalar type declared by the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarDecl {
    /// Scalar name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
}

/// An enum selected for emission.
#[derive(Debug, Clone)]
pub struct EnumDecl {
    /// Enum name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Values in schema order.
    pub values: Vec<EnumValue>,
}

/// An input record selected for emission.
#[derive(Debug, Clone)]
pub struct InputDecl {
    /// Record name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Fields whose type is top-level `NON_NULL`, in schema order.
    pub required: Vec<Field>,
    /// All other fields, in schema order.
    pub optional: Vec<Field>,
}

impl InputDecl {
    /// Iterates the fields in presentation order: required first.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.required.iter().chain(self.optional.iter())
    }

    /// Returns true if every field is optional.
    #[must_use]
    pub fn all_optional(&self) -> bool {
        self.required.is_empty()
    }
}

/// Returns true if the name belongs to the introspection meta-schema.
#[must_use]
pub fn is_internal(name: &str) -> bool {
    name.starts_with(INTERNAL_PREFIX)
}

/// Collects the enum, input record and scalar declarations of a schema.
///
/// Only `ENUM`, `INPUT_OBJECT` and `SCALAR` types are kept, names starting
/// with `__` are dropped, and every list is sorted by name. Input fields are split
/// into required and optional groups; field order inside each group is
/// the schema's own.
#[must_use]
pub fn collect(schema: &Schema) -> Declarations {
    let mut declarations = Declarations::default();

    for descriptor in &schema.types {
        if is_internal(&descriptor.name) {
            continue;
        }
        match descriptor.kind {
            Kind::Enum => declarations.enums.push(EnumDecl {
                name: descriptor.name.clone(),
                description: descriptor.description.clone(),
                values: descriptor.enum_values.clone(),
            }),
            Kind::InputObject => {
                let (required, optional): (Vec<Field>, Vec<Field>) = descriptor
                    .input_fields
                    .iter()
                    .cloned()
                    .partition(|f| f.type_ref.is_non_null());
                declarations.inputs.push(InputDecl {
                    name: descriptor.name.clone(),
                    description: descriptor.description.clone(),
                    required,
                    optional,
                });
            }
            Kind::Scalar => declarations.scalars.push(ScalarDecl {
                name: descriptor.name.clone(),
                description: descriptor.description.clone(),
            }),
            _ => {}
        }
    }

    declarations.enums.sort_by(|a, b| a.name.cmp(&b.name));
    declarations.inputs.sort_by(|a, b| a.name.cmp(&b.name));
    declarations.scalars.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::debug!(
        "collected {} enums, {} input records and {} scalars",
        declarations.enums.len(),
        declarations.inputs.len(),
        declarations.scalars.len()
    );

    declarations
}
