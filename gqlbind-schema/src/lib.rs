//! # gqlbind Schema
//!
//! GraphQL introspection data model and declaration collection.
//!
//! This crate provides:
//! - Typed representation of an introspection result (types, fields, enum values)
//! - A recursive [`TypeRef`] sum type for wrapped type references
//! - JSON parsing of introspection documents into a [`Schema`]
//! - The declaration collector that selects, filters and sorts what gets emitted

pub mod error;
pub mod ir;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use ir::{Declarations, EnumDecl, InputDecl, ScalarDecl, collect, is_internal};
pub use parser::parse_introspection;
pub use types::{EnumValue, Field, Kind, Schema, TypeDescriptor, TypeRef};
