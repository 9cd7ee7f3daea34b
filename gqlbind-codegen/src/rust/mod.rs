//! Rust code generation modules.

pub mod enums;
pub mod inputs;
pub mod scalars;
pub mod types;

pub use enums::EnumGenerator;
pub use inputs::InputGenerator;
pub use scalars::ScalarGenerator;
pub use types::{FieldType, ResolvedType, TypeExpr, field_type, resolve};

use crate::error::CodegenError;
use std::collections::HashMap;

/// Maps each wire name of `owner` to its Rust identifier.
///
/// Fails if two wire names normalize to the same identifier.
pub(crate) fn unique_identifiers<'n>(
    owner: &str,
    wire_names: impl IntoIterator<Item = &'n str>,
    normalize: impl Fn(&str) -> String,
) -> Result<Vec<String>, CodegenError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut identifiers = Vec::new();
    for wire in wire_names {
        let ident = normalize(wire);
        if let Some(first) = seen.insert(ident.clone(), wire) {
            return Err(CodegenError::collision(owner, ident, first, wire));
        }
        identifiers.push(ident);
    }
    Ok(identifiers)
}

/// Appends a description as `///` doc lines at the given indentation.
pub(crate) fn push_doc(output: &mut String, indent: &str, text: &str) {
    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            output.push_str(&format!("{indent}///\n"));
        } else {
            output.push_str(&format!("{indent}/// {line}\n"));
        }
    }
}
