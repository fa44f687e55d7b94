//! Scaffold generator.
//!
//! Generation is split into a pure planning step and an isolated
//! serialization step: [`plan`] builds the complete artifact tree in
//! memory with no I/O, and [`generate`] writes it under the output
//! directory. Template output contains no timestamps, no random
//! identifiers, and no absolute paths, so generating twice from an
//! unchanged model produces byte-identical files.

mod gen_entry;
mod gen_manifest;
mod gen_stub;
mod naming;
mod writer;

use std::path::Path;

use crate::error::Result;
use crate::model::SpecificationModel;

/// Header line stamped on generated TypeScript sources.
const GENERATED_HEADER: &str = "// Generated by toolforge. Do not edit.\n";

/// A single planned file, path relative to the output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub path: String,
    pub contents: String,
}

/// Files written by a successful generation run, in write order.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub written: Vec<String>,
}

/// Build the complete artifact tree for a model. Pure; no file system.
///
/// Each artifact comes from its own template function and none depends on
/// another artifact existing, so the plan order only fixes the write
/// order: manifest, build config, entry point, then one stub per tool in
/// model order.
pub fn plan(model: &SpecificationModel) -> Vec<Artifact> {
    let mut artifacts = vec![
        Artifact {
            path: "package.json".to_string(),
            contents: gen_manifest::package_json(&model.server),
        },
        Artifact {
            path: "tsconfig.json".to_string(),
            contents: gen_manifest::TSCONFIG.to_string(),
        },
        Artifact {
            path: "src/index.ts".to_string(),
            contents: gen_entry::entry_point(model),
        },
    ];

    for tool in &model.tools {
        artifacts.push(Artifact {
            path: format!("src/tools/{}.ts", tool.name),
            contents: gen_stub::tool_stub(tool),
        });
    }

    artifacts
}

/// Generate the scaffold under `out_dir`, creating directories as needed.
///
/// On a failed write the returned [`crate::Error::OutputWrite`] carries
/// the files already on disk; partial output is not rolled back.
pub fn generate(model: &SpecificationModel, out_dir: &Path) -> Result<GenerationReport> {
    writer::write_all(&plan(model), out_dir)
}
