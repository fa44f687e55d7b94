//! # toolforge_core
//!
//! Specification parser and scaffold generator for Toolforge.
//!
//! [`parse`] turns a tool-specification text into a [`SpecificationModel`];
//! [`generate`] turns that model into a runnable TypeScript MCP server
//! skeleton on disk. Both are stateless functions with no shared state
//! between invocations, so many specifications can be compiled in one
//! process.

pub mod error;
pub mod generate;
pub mod model;
pub mod parse;

pub use error::{Error, Result};
pub use generate::{Artifact, GenerationReport, generate};
pub use model::SpecificationModel;
pub use parse::parse;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
