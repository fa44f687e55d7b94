//! Serializes an artifact plan to disk.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::{Artifact, GenerationReport};

/// Write every artifact under `out_dir`, creating directories as needed.
///
/// Stops at the first failed write. The error carries the artifacts that
/// already made it to disk; nothing is rolled back.
pub fn write_all(artifacts: &[Artifact], out_dir: &Path) -> Result<GenerationReport> {
    let mut written: Vec<String> = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let path = out_dir.join(&artifact.path);
        let result = match path.parent() {
            Some(parent) => {
                fs::create_dir_all(parent).and_then(|()| fs::write(&path, &artifact.contents))
            }
            None => fs::write(&path, &artifact.contents),
        };
        if let Err(source) = result {
            return Err(Error::OutputWrite {
                path,
                written,
                source,
            });
        }
        written.push(artifact.path.clone());
    }

    Ok(GenerationReport { written })
}
