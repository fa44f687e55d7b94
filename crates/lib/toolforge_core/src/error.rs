//! Error taxonomy for specification parsing and scaffold generation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Terminal failures of a compiler invocation.
///
/// None of these are retried internally; the first error encountered is
/// surfaced and the invocation halts.
#[derive(Error, Debug)]
pub enum Error {
    /// The source text is missing a mandatory block.
    #[error("malformed specification: {0}")]
    MalformedSpecification(String),

    /// Two tool blocks declare the same name.
    #[error("duplicate tool name: {0}")]
    DuplicateToolName(String),

    /// A file-system write failed. `written` lists the files that already
    /// made it to disk, in write order, so callers can clean up; partial
    /// output is never rolled back.
    #[error("output write failed at {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        written: Vec<String>,
        source: std::io::Error,
    },
}
