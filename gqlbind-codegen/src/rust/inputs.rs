//! Input record code generation.

use crate::error::CodegenError;
use crate::naming::field_identifier;
use crate::rust::{push_doc, unique_identifiers};
use crate::rust::types::field_type;
use gqlbind_schema::Field;
use gqlbind_schema::ir::{Declarations, InputDecl};

const INPUT_DERIVES: &str = "#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n";
const DEFAULT_INPUT_DERIVES: &str =
    "#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]\n";

/// Generator for input record structs and the `Input` marker trait.
pub struct InputGenerator<'a> {
    decls: &'a Declarations,
}

impl<'a> InputGenerator<'a> {
    /// Creates a new input generator.
    #[must_use]
    pub fn new(decls: &'a Declarations) -> Self {
        Self { decls }
    }

    /// Generates the `Input` trait and every input record struct.
    ///
    /// # Errors
    /// Returns `CodegenError` if a field type cannot be resolved.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::new();

        output.push_str("#![allow(unused_imports)]\n\n");
        output.push_str("use serde::{Deserialize, Serialize};\n\n");
        output.push_str("use super::*;\n\n");
        output.push_str(&self.generate_marker());

        for input in &self.decls.inputs {
            output.push_str(&self.generate_input(input)?);
        }

        Ok(output)
    }

    /// Generates the marker trait implemented by every input record.
    fn generate_marker(&self) -> String {
        let mut output = String::new();
        output.push_str("/// Input represents one of the Input structs:\n");
        output.push_str("///\n");
        output.push_str(&format!(
            "/// {}.\n",
            self.decls.input_names().join(", ")
        ));
        output.push_str("pub trait Input: Serialize {}\n\n");
        output
    }

    /// Generates one input record.
    fn generate_input(&self, input: &InputDecl) -> Result<String, CodegenError> {
        let mut output = String::new();
        let name = &input.name;

        output.push_str(&format!("/// {name}\n"));
        if let Some(description) = &input.description {
            output.push_str("///\n");
            push_doc(&mut output, "", description);
        }
        let idents = unique_identifiers(
            name,
            input.fields().map(|f| f.name.as_str()),
            field_identifier,
        )?;

        if input.all_optional() {
            output.push_str(DEFAULT_INPUT_DERIVES);
        } else {
            output.push_str(INPUT_DERIVES);
        }
        output.push_str(&format!("pub struct {name} {{\n"));

        for (field, ident) in input.fields().zip(&idents) {
            output.push_str(&self.generate_field(name, field, ident)?);
        }

        output.push_str("}\n\n");
        output.push_str(&format!("impl Input for {name} {{}}\n\n"));

        Ok(output)
    }

    /// Generates a single struct field with its serde attributes.
    fn generate_field(
        &self,
        owner: &str,
        field: &Field,
        ident: &str,
    ) -> Result<String, CodegenError> {
        let mut output = String::new();
        let ty = field_type(owner, field)?;

        if ty.required {
            output.push_str("    /// (Required.)\n");
        } else {
            output.push_str("    /// (Optional.)\n");
        }
        if let Some(description) = &field.description {
            output.push_str("    ///\n");
            push_doc(&mut output, "    ", description);
        }

        if ty.required {
            output.push_str(&format!("    #[serde(rename = {:?})]\n", field.name));
        } else {
            output.push_str(&format!(
                "    #[serde(rename = {:?}, skip_serializing_if = \"Option::is_none\")]\n",
                field.name
            ));
        }
        output.push_str(&format!("    pub {ident}: {},\n", ty.expr));

        Ok(output)
    }
}
