//! # gqlbind Client
//!
//! Fetches a GraphQL schema from a live endpoint by introspection.
//!
//! This crate provides:
//! - Loader builder with endpoint, region and authentication options
//! - The introspection query document
//! - Async schema loading over HTTP

pub mod builder;
pub mod error;
pub mod loader;
pub mod query;

pub use builder::{DEFAULT_USER_AGENT, EU_ENDPOINT, LoaderBuilder, US_ENDPOINT};
pub use error::LoadError;
pub use loader::SchemaLoader;
pub use query::INTROSPECTION_QUERY;
