//! # revw-schema
//!
//! JSON Schema registry and validation for Revw.
//!
//! Record and response types are defined in `revw-core` with
//! `#[derive(JsonSchema)]`. This crate collects their schemas into a
//! [`SchemaRegistry`] that backs `revw schema` and lets tests and tooling
//! validate serialized output.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
