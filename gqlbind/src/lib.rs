//! # gqlbind
//!
//! Generate Rust bindings for the enums and input objects of a GraphQL API.
//!
//! The schema is obtained by introspection, either live from an endpoint or
//! from a saved introspection document, and three files are produced:
//! `enums.rs`, `inputs.rs` and `scalars.rs`. Include them as sibling modules
//! and re-export their items from the parent, since `inputs.rs` refers to
//! enums and scalars through `use super::*;`:
//!
//! ```ignore
//! mod enums;
//! mod inputs;
//! mod scalars;
//!
//! pub use enums::*;
//! pub use inputs::*;
//! pub use scalars::*;
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use gqlbind::prelude::*;
//!
//! let loader = LoaderBuilder::new()
//!     .use_eu_region()
//!     .api_token(token)
//!     .build()?;
//! let schema = loader.load().await?;
//! generate_schema(&schema, Path::new("src/graphql"))?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Introspection document model and parsing
//! - [`codegen`] - Rust binding generation and file emission
//! - [`client`] - Live schema loading over HTTP

pub mod prelude;

/// Introspection document model and parsing.
pub mod schema {
    pub use gqlbind_schema::*;
}

/// Rust binding generation from a schema.
pub mod codegen {
    pub use gqlbind_codegen::*;
}

/// Live schema loading.
pub mod client {
    pub use gqlbind_client::*;
}
