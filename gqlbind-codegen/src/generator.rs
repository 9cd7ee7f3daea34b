//! Emission pipeline.
//!
//! Renders the collected declarations into one Rust source file per
//! category, canonicalizes each with `syn` + `prettyplease`, and writes the
//! results to a destination directory.

use crate::error::CodegenError;
use crate::rust::{EnumGenerator, InputGenerator, ScalarGenerator};
use gqlbind_schema::ir::Declarations;
use std::path::{Path, PathBuf};

/// File name of the generated enums.
pub const ENUMS_FILE: &str = "enums.rs";

/// File name of the generated input records.
pub const INPUTS_FILE: &str = "inputs.rs";

/// File name of the generated custom scalars.
pub const SCALARS_FILE: &str = "scalars.rs";

/// License preamble and generated-file marker placed at the top of every file.
pub const PREAMBLE: &str = "\
// Copyright (c) gqlbind contributors
// SPDX-License-Identifier: MIT
//
// Code generated by gqlbind; DO NOT EDIT.
";

/// A rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name relative to the destination directory.
    pub name: String,
    /// Full file content.
    pub content: String,
    /// False if canonicalization failed and the content is the raw render.
    pub formatted: bool,
}

/// Main code generator.
pub struct Generator<'a> {
    decls: &'a Declarations,
}

impl<'a> Generator<'a> {
    /// Creates a new generator over collected declarations.
    #[must_use]
    pub fn new(decls: &'a Declarations) -> Self {
        Self { decls }
    }

    /// Renders every output file: enums, input records, then scalars.
    ///
    /// # Errors
    /// Returns `CodegenError` if an input field type cannot be resolved or
    /// two wire names of one declaration map to the same identifier.
    /// Formatting failures are not errors; see [`render_file`].
    pub fn generate(&self) -> Result<Vec<GeneratedFile>, CodegenError> {
        let enums = EnumGenerator::new(self.decls).generate()?;
        let inputs = InputGenerator::new(self.decls).generate()?;
        let scalars = ScalarGenerator::new(self.decls).generate();

        Ok(vec![
            render_file(ENUMS_FILE, &enums),
            render_file(INPUTS_FILE, &inputs),
            render_file(SCALARS_FILE, &scalars),
        ])
    }
}

/// Parses and pretty-prints generated Rust source.
///
/// # Errors
/// Returns the `syn` error if the source is not a valid Rust file.
pub fn canonicalize(source: &str) -> Result<String, syn::Error> {
    let file = syn::parse_file(source)?;
    Ok(prettyplease::unparse(&file))
}

/// Assembles a file from a rendered body.
///
/// The body is canonicalized and placed under [`PREAMBLE`]. If it does not
/// parse, the raw body is kept and the error is recorded in a comment at the
/// top, so the file is still written and the fault can be inspected.
#[must_use]
pub fn render_file(name: &str, body: &str) -> GeneratedFile {
    match canonicalize(body) {
        Ok(formatted) => GeneratedFile {
            name: name.to_string(),
            content: format!("{PREAMBLE}\n{formatted}"),
            formatted: true,
        },
        Err(e) => {
            tracing::warn!("format error in {}: {}", name, e);
            GeneratedFile {
                name: name.to_string(),
                content: format!("{PREAMBLE}\n// format error: {e}\n\n{body}"),
                formatted: false,
            }
        }
    }
}

/// Writes generated files into `dir`, overwriting existing ones.
///
/// # Returns
/// Paths of the written files.
///
/// # Errors
/// Returns `CodegenError::Write` on the first file that cannot be written.
pub fn write_files(dir: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>, CodegenError> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.name);
        tracing::info!("writing {}", path.display());
        std::fs::write(&path, &file.content).map_err(|source| CodegenError::Write {
            path: path.display().to_string(),
            source,
        })?;
        written.push(path);
    }
    Ok(written)
}
