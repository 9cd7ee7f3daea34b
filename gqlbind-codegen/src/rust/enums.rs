//! Enum code generation.

use crate::error::CodegenError;
use crate::naming::enum_value_identifier;
use crate::rust::{push_doc, unique_identifiers};
use gqlbind_schema::ir::{Declarations, EnumDecl};

const ENUM_DERIVES: &str =
    "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]\n";

/// Generator for enum definitions.
pub struct EnumGenerator<'a> {
    decls: &'a Declarations,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(decls: &'a Declarations) -> Self {
        Self { decls }
    }

    /// Generates all enum definitions, in declaration order.
    ///
    /// # Errors
    /// Returns `CodegenError::NameCollision` if two values of one enum
    /// normalize to the same variant name.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::new();

        output.push_str("#![allow(clippy::enum_variant_names)]\n\n");
        output.push_str("use serde::{Deserialize, Serialize};\n\n");

        for enum_decl in &self.decls.enums {
            output.push_str(&self.generate_enum(enum_decl)?);
        }

        Ok(output)
    }

    /// Generates one enum with its `as_str` accessor and `Display` impl.
    fn generate_enum(&self, decl: &EnumDecl) -> Result<String, CodegenError> {
        let mut output = String::new();
        let name = &decl.name;
        let variants = unique_identifiers(
            name,
            decl.values.iter().map(|v| v.name.as_str()),
            |value| enum_value_identifier(name, value),
        )?;

        output.push_str(&format!("/// {name}\n"));
        if let Some(description) = &decl.description {
            output.push_str("///\n");
            push_doc(&mut output, "", description);
        }
        output.push_str(ENUM_DERIVES);
        output.push_str(&format!("pub enum {name} {{\n"));
        for (value, variant) in decl.values.iter().zip(&variants) {
            if let Some(description) = &value.description {
                push_doc(&mut output, "    ", description);
            }
            if value.is_deprecated {
                output.push_str("    /// Deprecated.\n");
            }
            output.push_str(&format!("    #[serde(rename = {:?})]\n", value.name));
            output.push_str(&format!("    {variant},\n"));
        }
        output.push_str("}\n\n");

        output.push_str(&format!("impl {name} {{\n"));
        output.push_str("    /// Returns the value as sent on the wire.\n");
        output.push_str("    #[must_use]\n");
        output.push_str("    pub const fn as_str(&self) -> &'static str {\n");
        output.push_str("        match *self {\n");
        for (value, variant) in decl.values.iter().zip(&variants) {
            output.push_str(&format!("            Self::{variant} => {:?},\n", value.name));
        }
        output.push_str("        }\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str(&format!("impl std::fmt::Display for {name} {{\n"));
        output.push_str(
            "    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {\n",
        );
        output.push_str("        f.write_str(self.as_str())\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlbind_schema::{Schema, TypeDescriptor, collect};

    fn create_test_decls(types: Vec<TypeDescriptor>) -> Declarations {
        let mut schema = Schema::new();
        for t in types {
            schema.add_type(t);
        }
        collect(&schema)
    }

    #[test]
    fn test_generate_enum() {
        let decls = create_test_decls(vec![TypeDescriptor::enumeration(
            "Status",
            &["ACTIVE", "INACTIVE"],
        )]);
        let output = EnumGenerator::new(&decls).generate().unwrap();

        assert!(output.contains("pub enum Status {"));
        assert!(output.contains("#[serde(rename = \"ACTIVE\")]\n    StatusActive,"));
        assert!(output.contains("#[serde(rename = \"INACTIVE\")]\n    StatusInactive,"));
        assert!(output.contains("Self::StatusActive => \"ACTIVE\","));
        assert!(output.contains("impl std::fmt::Display for Status"));
    }

    #[test]
    fn test_generate_shared_value_names() {
        let decls = create_test_decls(vec![
            TypeDescriptor::enumeration("Status", &["ACTIVE"]),
            TypeDescriptor::enumeration("Membership", &["ACTIVE"]),
        ]);
        let output = EnumGenerator::new(&decls).generate().unwrap();

        assert!(output.contains("MembershipActive,"));
        assert!(output.contains("StatusActive,"));
    }

    #[test]
    fn test_generate_sorted() {
        let decls = create_test_decls(vec![
            TypeDescriptor::enumeration("Zeta", &["A"]),
            TypeDescriptor::enumeration("Alpha", &["A"]),
            TypeDescriptor::enumeration("Mike", &["A"]),
        ]);
        let output = EnumGenerator::new(&decls).generate().unwrap();

        let alpha = output.find("pub enum Alpha").unwrap();
        let mike = output.find("pub enum Mike").unwrap();
        let zeta = output.find("pub enum Zeta").unwrap();
        assert!(alpha < mike && mike < zeta);
    }

    #[test]
    fn test_generate_descriptions_and_deprecation() {
        let mut color = TypeDescriptor::enumeration("Color", &["RED", "MAUVE"]);
        color.description = Some("Paint colors.".to_string());
        color.enum_values[0].description = Some("Bright red.".to_string());
        color.enum_values[1].is_deprecated = true;
        let decls = create_test_decls(vec![color]);
        let output = EnumGenerator::new(&decls).generate().unwrap();

        assert!(output.contains("/// Color\n///\n/// Paint colors.\n"));
        assert!(output.contains("    /// Bright red.\n    #[serde(rename = \"RED\")]"));
        assert!(output.contains("    /// Deprecated.\n    #[serde(rename = \"MAUVE\")]"));
    }

    #[test]
    fn test_generate_parses_as_rust() {
        let decls = create_test_decls(vec![TypeDescriptor::enumeration(
            "ScanState",
            &["QUEUED", "IN_PROGRESS", "DONE"],
        )]);
        let output = EnumGenerator::new(&decls).generate().unwrap();
        assert!(syn::parse_file(&output).is_ok());
    }

    #[test]
    fn test_generate_empty_decls() {
        let decls = Declarations::default();
        let output = EnumGenerator::new(&decls).generate().unwrap();
        assert!(!output.contains("pub enum"));
        assert!(syn::parse_file(&output).is_ok());
    }

    #[test]
    fn test_colliding_values_rejected() {
        let decls = create_test_decls(vec![TypeDescriptor::enumeration(
            "Flag",
            &["FOO_BAR", "FOO__BAR"],
        )]);
        let err = EnumGenerator::new(&decls).generate().unwrap_err();
        match err {
            CodegenError::NameCollision {
                owner,
                identifier,
                ..
            } => {
                assert_eq!(owner, "Flag");
                assert_eq!(identifier, "FlagFooBar");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
