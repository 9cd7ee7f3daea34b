//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use gqlbind::prelude::*;
//! ```

// Schema types
pub use gqlbind_schema::{
    Declarations, EnumDecl, EnumValue, Field, InputDecl, Kind, ParseError, ScalarDecl, Schema,
    TypeDescriptor, TypeRef, collect, parse_introspection,
};

// Code generation
pub use gqlbind_codegen::generator::{ENUMS_FILE, INPUTS_FILE, SCALARS_FILE};
pub use gqlbind_codegen::{
    CodegenError, GeneratedFile, Generator, generate, generate_from_file, generate_from_json,
    generate_schema, generate_to_dir, write_files,
};

// Loading
pub use gqlbind_client::{EU_ENDPOINT, LoadError, LoaderBuilder, SchemaLoader, US_ENDPOINT};
