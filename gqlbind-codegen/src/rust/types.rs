//! Type reference resolution.
//!
//! Turns a wrapped [`TypeRef`] into the Rust type expression used in an
//! input record field. Wrappers are interpreted outside-in: a bare leaf or a
//! list is nullable (`Option<..>`), and `NON_NULL` strips exactly one
//! `Option` from whatever its child resolved to.

use crate::error::CodegenError;
use gqlbind_schema::{Field, Kind, TypeRef};
use std::fmt;

/// A Rust type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A named type (`String`, `i32`, `CreateUserInput`).
    Named(String),
    /// A heap-allocated value (`Box<T>`).
    Boxed(Box<TypeExpr>),
    /// A list (`Vec<T>`).
    List(Box<TypeExpr>),
    /// A nullable value (`Option<T>`).
    Optional(Box<TypeExpr>),
}

impl TypeExpr {
    /// Returns true if the outermost layer is `Option`.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Boxed(inner) => write!(f, "Box<{inner}>"),
            Self::List(inner) => write!(f, "Vec<{inner}>"),
            Self::Optional(inner) => write!(f, "Option<{inner}>"),
        }
    }
}

/// Result of resolving a type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Rust type expression.
    pub expr: TypeExpr,
    /// Whether the expression admits null.
    pub nullable: bool,
}

/// Field-level type: the resolved expression plus its required/optional tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldType {
    /// Rust type expression.
    pub expr: TypeExpr,
    /// True when the field's type is top-level `NON_NULL`.
    pub required: bool,
}

/// Returns true for the scalars that map onto Rust primitives.
#[must_use]
pub fn is_builtin_scalar(name: &str) -> bool {
    matches!(name, "String" | "Int" | "Float" | "Boolean")
}

/// Maps a GraphQL built-in scalar to its Rust type.
///
/// Custom scalars and all other named types keep their schema name.
#[must_use]
pub fn rust_type_name(name: &str) -> &str {
    match name {
        "String" => "String",
        "Int" => "i32",
        "Float" => "f64",
        "Boolean" => "bool",
        other => other,
    }
}

/// Resolves a type reference into a Rust type expression.
///
/// # Errors
/// Returns `CodegenError::InvariantViolation` if a `NON_NULL` wrapper is
/// applied to something that already resolved to a non-nullable type.
pub fn resolve(type_ref: &TypeRef) -> Result<ResolvedType, CodegenError> {
    resolve_in(type_ref, false)
}

/// Input objects referenced outside a list are boxed: a record may refer to
/// itself (filters with `and`/`or`/`not` do), and `Vec` already provides the
/// indirection inside lists.
fn resolve_in(type_ref: &TypeRef, in_list: bool) -> Result<ResolvedType, CodegenError> {
    match type_ref {
        TypeRef::Named { kind, name } => {
            let mut expr = TypeExpr::Named(rust_type_name(name).to_string());
            if *kind == Kind::InputObject && !in_list {
                expr = TypeExpr::Boxed(Box::new(expr));
            }
            Ok(ResolvedType {
                expr: TypeExpr::Optional(Box::new(expr)),
                nullable: true,
            })
        }
        TypeRef::List(inner) => {
            let inner = resolve_in(inner, true)?;
            Ok(ResolvedType {
                expr: TypeExpr::Optional(Box::new(TypeExpr::List(Box::new(inner.expr)))),
                nullable: true,
            })
        }
        TypeRef::NonNull(inner) => match resolve_in(inner, in_list)?.expr {
            TypeExpr::Optional(expr) => Ok(ResolvedType {
                expr: *expr,
                nullable: false,
            }),
            other => Err(CodegenError::invariant(format!(
                "non-null wrapper applied to non-nullable type `{other}` (from `{type_ref}`)"
            ))),
        },
    }
}

/// Resolves the type of an input record field.
///
/// # Errors
/// Returns `CodegenError::UnsupportedFieldType` if the field's leaf is not a
/// scalar, enum or input object, or any error from [`resolve`].
pub fn field_type(owner: &str, field: &Field) -> Result<FieldType, CodegenError> {
    let (kind, name) = field.type_ref.leaf();
    if !kind.is_input() {
        return Err(CodegenError::UnsupportedFieldType {
            owner: owner.to_string(),
            field: field.name.clone(),
            type_name: name.to_string(),
            kind,
        });
    }

    let resolved = resolve(&field.type_ref)?;
    Ok(FieldType {
        expr: resolved.expr,
        required: field.type_ref.is_non_null(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int() -> TypeRef {
        TypeRef::scalar("Int")
    }

    #[test]
    fn test_bare_leaf_is_nullable() {
        let resolved = resolve(&TypeRef::scalar("String")).unwrap();
        assert_eq!(resolved.expr.to_string(), "Option<String>");
        assert!(resolved.nullable);
    }

    #[test]
    fn test_builtin_scalars() {
        assert_eq!(rust_type_name("Int"), "i32");
        assert_eq!(rust_type_name("Float"), "f64");
        assert_eq!(rust_type_name("Boolean"), "bool");
        assert_eq!(rust_type_name("String"), "String");
        assert_eq!(rust_type_name("ID"), "ID");
        assert_eq!(rust_type_name("DateTime"), "DateTime");
        assert!(is_builtin_scalar("Boolean"));
        assert!(!is_builtin_scalar("ID"));
    }

    #[test]
    fn test_non_null_leaf() {
        let resolved = resolve(&TypeRef::non_null(TypeRef::scalar("String"))).unwrap();
        assert_eq!(resolved.expr.to_string(), "String");
        assert!(!resolved.nullable);
    }

    #[test]
    fn test_list_of_non_null() {
        let resolved = resolve(&TypeRef::list(TypeRef::non_null(int()))).unwrap();
        assert_eq!(resolved.expr.to_string(), "Option<Vec<i32>>");
        assert!(resolved.nullable);
    }

    #[test]
    fn test_non_null_list_of_nullable() {
        let resolved = resolve(&TypeRef::non_null(TypeRef::list(int()))).unwrap();
        assert_eq!(resolved.expr.to_string(), "Vec<Option<i32>>");
        assert!(!resolved.nullable);
    }

    #[test]
    fn test_non_null_list_of_non_null() {
        let resolved =
            resolve(&TypeRef::non_null(TypeRef::list(TypeRef::non_null(int())))).unwrap();
        assert_eq!(resolved.expr.to_string(), "Vec<i32>");
        assert!(!resolved.nullable);
    }

    #[test]
    fn test_list_of_nullable() {
        let resolved = resolve(&TypeRef::list(int())).unwrap();
        assert_eq!(resolved.expr.to_string(), "Option<Vec<Option<i32>>>");
    }

    #[test]
    fn test_seven_levels_of_wrapping() {
        let t = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::list(
            TypeRef::non_null(TypeRef::list(TypeRef::non_null(int()))),
        ))));
        assert_eq!(t.depth(), 7);
        let resolved = resolve(&t).unwrap();
        assert_eq!(resolved.expr.to_string(), "Vec<Vec<Vec<i32>>>");
        assert!(!resolved.nullable);
    }

    #[test]
    fn test_double_non_null_is_invariant_violation() {
        let t = TypeRef::non_null(TypeRef::non_null(int()));
        let err = resolve(&t).unwrap_err();
        assert!(err.is_internal());
        assert!(matches!(err, CodegenError::InvariantViolation { .. }));
    }

    #[test]
    fn test_nested_double_non_null_is_invariant_violation() {
        let t = TypeRef::list(TypeRef::non_null(TypeRef::non_null(int())));
        assert!(resolve(&t).unwrap_err().is_internal());
    }

    #[test]
    fn test_input_object_boxed_outside_list() {
        let filter = TypeRef::named(Kind::InputObject, "AssetFilter");
        let resolved = resolve(&filter).unwrap();
        assert_eq!(resolved.expr.to_string(), "Option<Box<AssetFilter>>");

        let resolved = resolve(&TypeRef::non_null(filter.clone())).unwrap();
        assert_eq!(resolved.expr.to_string(), "Box<AssetFilter>");

        let resolved = resolve(&TypeRef::list(TypeRef::non_null(filter))).unwrap();
        assert_eq!(resolved.expr.to_string(), "Option<Vec<AssetFilter>>");
    }

    #[test]
    fn test_enum_leaf_not_boxed() {
        let resolved = resolve(&TypeRef::named(Kind::Enum, "Color")).unwrap();
        assert_eq!(resolved.expr.to_string(), "Option<Color>");
    }

    #[test]
    fn test_field_type_required_and_optional() {
        let required = Field::new("name", TypeRef::non_null(TypeRef::scalar("String")));
        let ft = field_type("CreateUserInput", &required).unwrap();
        assert!(ft.required);
        assert!(!ft.expr.is_optional());
        assert_eq!(ft.expr.to_string(), "String");

        let optional = Field::new("nickname", TypeRef::scalar("String"));
        let ft = field_type("CreateUserInput", &optional).unwrap();
        assert!(!ft.required);
        assert!(ft.expr.is_optional());
        assert_eq!(ft.expr.to_string(), "Option<String>");
    }

    #[test]
    fn test_field_type_list_tier_is_top_level_only() {
        let field = Field::new("ids", TypeRef::list(TypeRef::non_null(TypeRef::scalar("ID"))));
        let ft = field_type("Query", &field).unwrap();
        assert!(!ft.required);
        assert_eq!(ft.expr.to_string(), "Option<Vec<ID>>");
    }

    #[test]
    fn test_field_type_rejects_object_leaf() {
        let field = Field::new(
            "owner",
            TypeRef::non_null(TypeRef::named(Kind::Object, "User")),
        );
        match field_type("FilterInput", &field) {
            Err(CodegenError::UnsupportedFieldType {
                owner,
                field,
                type_name,
                kind,
            }) => {
                assert_eq!(owner, "FilterInput");
                assert_eq!(field, "owner");
                assert_eq!(type_name, "User");
                assert_eq!(kind, Kind::Object);
            }
            other => panic!("expected UnsupportedFieldType, got {other:?}"),
        }
    }

    #[test]
    fn test_field_type_rejects_union_in_list() {
        let field = Field::new(
            "results",
            TypeRef::list(TypeRef::named(Kind::Union, "SearchResult")),
        );
        assert!(matches!(
            field_type("SearchInput", &field),
            Err(CodegenError::UnsupportedFieldType { .. })
        ));
    }
}
