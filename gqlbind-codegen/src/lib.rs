//! # gqlbind Codegen
//!
//! Rust binding generation from GraphQL introspection.
//!
//! This crate provides:
//! - Type reference resolution into Rust type expressions
//! - Identifier normalization for fields and enum values
//! - Enum, input record and custom scalar generation
//! - The emission pipeline that formats and writes the output files

pub mod error;
pub mod generator;
pub mod naming;
pub mod rust;

pub use error::CodegenError;
pub use generator::{GeneratedFile, Generator, render_file, write_files};

use gqlbind_schema::Schema;
use std::path::{Path, PathBuf};

/// Generates the binding files for a parsed schema.
///
/// # Errors
/// Returns `CodegenError` if a field type cannot be resolved.
pub fn generate(schema: &Schema) -> Result<Vec<GeneratedFile>, CodegenError> {
    let decls = gqlbind_schema::collect(schema);
    Generator::new(&decls).generate()
}

/// Generates the binding files from an introspection JSON document.
///
/// # Arguments
/// * `json` - Introspection document content
///
/// # Returns
/// Rendered files, not yet written.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_json(json: &str) -> Result<Vec<GeneratedFile>, CodegenError> {
    let schema = gqlbind_schema::parse_introspection(json)?;
    generate(&schema)
}

/// Generates the binding files for a schema and writes them into `dir`.
///
/// # Returns
/// Paths of the written files.
///
/// # Errors
/// Returns `CodegenError` if generation or writing fails.
pub fn generate_schema(schema: &Schema, dir: &Path) -> Result<Vec<PathBuf>, CodegenError> {
    let files = generate(schema)?;
    write_files(dir, &files)
}

/// Generates the binding files from an introspection document and writes
/// them into `dir`.
///
/// # Errors
/// Returns `CodegenError` if parsing, generation or writing fails.
pub fn generate_to_dir(json: &str, dir: &Path) -> Result<Vec<PathBuf>, CodegenError> {
    let files = generate_from_json(json)?;
    write_files(dir, &files)
}

/// Generates the binding files from an introspection document on disk.
///
/// # Arguments
/// * `path` - Path to the saved introspection JSON
/// * `dir` - Destination directory
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, generation or writing fails.
pub fn generate_from_file(path: &Path, dir: &Path) -> Result<Vec<PathBuf>, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_to_dir(&json, dir)
}
