//! Custom scalar code generation.
//!
//! Every non built-in scalar of the schema gets a Rust definition so the
//! generated input records compile without hand-written support code:
//!
//! - `ID` is an alias of `String`.
//! - `Date` and `DateTime` are transparent newtypes over their ISO-8601 text.
//! - `Map` is a sorted map of JSON values.
//! - Any other scalar is an alias of `serde_json::Value`.

use crate::rust::push_doc;
use crate::rust::types::is_builtin_scalar;
use gqlbind_schema::ir::{Declarations, ScalarDecl};

const MAP_TYPE: &str = "std::collections::BTreeMap<String, serde_json::Value>";
const VALUE_TYPE: &str = "serde_json::Value";

/// How a custom scalar is represented in Rust.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Representation {
    /// A type alias of the given Rust type.
    Alias(&'static str),
    /// A transparent newtype over `String`.
    Text,
}

fn representation(name: &str) -> Representation {
    match name {
        "ID" => Representation::Alias("String"),
        "Date" | "DateTime" => Representation::Text,
        "Map" => Representation::Alias(MAP_TYPE),
        _ => Representation::Alias(VALUE_TYPE),
    }
}

fn default_description(name: &str) -> Option<&'static str> {
    match name {
        "ID" => Some("A unique identifier, sent as a string."),
        "Date" => Some("An ISO-8601 encoded UTC date."),
        "DateTime" => Some("An ISO-8601 encoded UTC date and time."),
        "Map" => Some("A generic map of string keys to values."),
        _ => None,
    }
}

/// Generator for custom scalar definitions.
pub struct ScalarGenerator<'a> {
    decls: &'a Declarations,
}

impl<'a> ScalarGenerator<'a> {
    /// Creates a new scalar generator.
    #[must_use]
    pub fn new(decls: &'a Declarations) -> Self {
        Self { decls }
    }

    /// Generates definitions for every custom scalar, in declaration order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str("#![allow(unused_imports)]\n\n");
        output.push_str("use serde::{Deserialize, Serialize};\n\n");

        for scalar in &self.decls.scalars {
            if is_builtin_scalar(&scalar.name) {
                continue;
            }
            output.push_str(&self.generate_scalar(scalar));
        }

        output
    }

    fn generate_scalar(&self, scalar: &ScalarDecl) -> String {
        let mut output = String::new();
        let name = &scalar.name;

        output.push_str(&format!("/// {name}\n"));
        let description = scalar
            .description
            .as_deref()
            .or_else(|| default_description(name));
        if let Some(description) = description {
            output.push_str("///\n");
            push_doc(&mut output, "", description);
        }

        match representation(name) {
            Representation::Alias(target) => {
                output.push_str(&format!("pub type {name} = {target};\n\n"));
            }
            Representation::Text => {
                output.push_str(
                    "#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, \
                     Serialize, Deserialize)]\n"
                );
                output.push_str("#[serde(transparent)]\n");
                output.push_str(&format!("pub struct {name}(pub String);\n\n"));

                output.push_str(&format!("impl {name} {{\n"));
                output.push_str("    /// Returns the encoded text.\n");
                output.push_str("    #[must_use]\n");
                output.push_str("    pub fn as_str(&self) -> &str {\n");
                output.push_str("        &self.0\n");
                output.push_str("    }\n");
                output.push_str("}\n\n");

                output.push_str(&format!("impl From<String> for {name} {{\n"));
                output.push_str("    fn from(value: String) -> Self {\n");
                output.push_str("        Self(value)\n");
                output.push_str("    }\n");
                output.push_str("}\n\n");
            }
        }

        output
    }
}
